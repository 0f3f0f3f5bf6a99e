mod compression;
mod convert;
mod error;
mod kind;
mod node;
mod provider;
mod render;
mod snapshot;

/// Compression detection result.
pub use compression::Compression;
/// Value-to-tree conversion entry points.
pub use convert::{convert_container, convert_element, convert_to_tree};
/// Error and result aliases.
pub use error::{Result, TreeError};
/// Resolved type kinds.
pub use kind::{Kind, PrimitiveKind};
/// Generic output tree.
pub use node::{Object, OutputNode};
/// Inspection provider contract.
pub use provider::{FieldDescriptor, Provider, kind_of_value};
/// Leaf rendering policy.
pub use render::{format_hex, render_primitive};
/// Serialized snapshot format and its provider.
pub use snapshot::{CapturedValue, Datum, FieldDef, Snapshot, SnapshotProvider, TypeDef, TypeRef, ValueRef};
