use thiserror::Error;

use crate::tree::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors produced while inspecting typed values and converting them to trees.
#[derive(Debug, Error)]
pub enum TreeError {
	/// Container conversion was requested for a value that is not a struct or union.
	#[error("expected struct or union, got {kind}")]
	NotAContainer {
		/// Resolved kind of the offending value.
		kind: Kind,
	},
	/// Kind-specific operation was applied to a value or type of another kind.
	#[error("invalid operation {op} on {kind}")]
	InvalidOperation {
		/// Operation that was attempted.
		op: &'static str,
		/// Resolved kind the operation was applied to.
		kind: Kind,
	},
	/// Provider failed to produce a field or element value.
	#[error("provider access failed at {at}: {reason}")]
	ProviderAccess {
		/// Field or element being fetched.
		at: String,
		/// Provider-reported failure.
		reason: String,
	},
	/// Provider was asked for an array element past the array bounds.
	#[error("element index {index} out of range for length {length}")]
	ElementOutOfRange {
		/// Requested element index.
		index: usize,
		/// Declared array length.
		length: usize,
	},
	/// Output object already holds the key being inserted.
	#[error("duplicate output key {key:?}")]
	DuplicateKey {
		/// Colliding key.
		key: String,
	},
	/// Type name is missing from the snapshot type table.
	#[error("unknown type: {name}")]
	UnknownType {
		/// Referenced type name.
		name: String,
	},
	/// Alias chain never reaches a concrete type.
	#[error("alias cycle through type {name}")]
	AliasCycle {
		/// Type name where the cycle was detected.
		name: String,
	},
	/// Named value is missing from the snapshot.
	#[error("unknown value: {name}")]
	UnknownValue {
		/// Requested value name.
		name: String,
	},
	/// No single value could be picked for conversion.
	#[error("cannot select value: {reason}")]
	ValueSelection {
		/// Why the selection failed.
		reason: String,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Snapshot document is not valid JSON for the expected schema.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Inflated snapshot document is larger than the accepted size.
	#[error("inflated snapshot exceeds {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum document size in bytes.
		limit: u64,
	},
}
