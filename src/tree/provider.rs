use crate::tree::{Kind, Result};

/// One declared field of a struct or union type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor<T> {
	/// Declared name; `None` for anonymous nested structs and unions.
	pub name: Option<Box<str>>,
	/// Declared field type.
	pub ty: T,
	/// Zero-based declaration position inside the parent type.
	pub position: usize,
}

/// Capability surface an inspection host exposes for typed runtime values.
///
/// Handles are borrowed read-only; implementations report unreadable storage
/// as [`TreeError::ProviderAccess`](crate::tree::TreeError::ProviderAccess).
pub trait Provider {
	/// Handle to one runtime value.
	type Value;
	/// Handle to one type description.
	type Type;

	/// Type handle of a value, possibly an alias.
	fn type_of(&self, value: &Self::Value) -> Self::Type;

	/// Kind of a type after stripping aliases.
	fn kind_of(&self, ty: &Self::Type) -> Result<Kind>;

	/// Ordered field list of a struct or union type.
	fn fields_of(&self, ty: &Self::Type) -> Result<Vec<FieldDescriptor<Self::Type>>>;

	/// Sub-value for one field of a struct or union value, navigated by position.
	fn field_value(&self, value: &Self::Value, field: &FieldDescriptor<Self::Type>) -> Result<Self::Value>;

	/// Element type and element count of an array type.
	fn element_type_and_length(&self, ty: &Self::Type) -> Result<(Self::Type, usize)>;

	/// One element of an array value; `index` must be below the array length.
	fn element_value(&self, value: &Self::Value, index: usize) -> Result<Self::Value>;

	/// Integer interpretation of an integer-kind primitive value.
	fn integer_value(&self, value: &Self::Value) -> Result<i128>;

	/// Provider's own canonical stringification of a primitive value.
	fn default_text(&self, value: &Self::Value) -> Result<String>;
}

/// Resolved kind of a value's type.
pub fn kind_of_value<P: Provider + ?Sized>(provider: &P, value: &P::Value) -> Result<Kind> {
	provider.kind_of(&provider.type_of(value))
}
