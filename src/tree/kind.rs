use std::fmt;

use serde::Deserialize;

/// Resolved type kind of an inspected value, with aliases already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Leaf value rendered as text.
	Primitive(PrimitiveKind),
	/// Record with ordered fields.
	Struct,
	/// Overlapping fields sharing storage.
	Union,
	/// Fixed-length homogeneous sequence.
	Array,
}

impl Kind {
	/// Whether values of this kind expose a field list.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Struct | Self::Union)
	}

	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Primitive(primitive) => primitive.as_str(),
			Self::Struct => "struct",
			Self::Union => "union",
			Self::Array => "array",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Primitive sub-kind; selects the rendering rule for a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
	/// Signed or unsigned integer, rendered as hex.
	Int,
	/// Character.
	Char,
	/// Boolean.
	Bool,
	/// Enumerated value.
	Enum,
	/// Floating point.
	Float,
	/// Raw pointer, never dereferenced.
	Pointer,
}

impl PrimitiveKind {
	/// Render primitive sub-kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Int => "int",
			Self::Char => "char",
			Self::Bool => "bool",
			Self::Enum => "enum",
			Self::Float => "float",
			Self::Pointer => "pointer",
		}
	}
}
