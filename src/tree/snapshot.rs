use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::tree::compression::decode_bytes;
use crate::tree::{Compression, FieldDescriptor, Kind, PrimitiveKind, Provider, Result, TreeError};

/// Captured type table plus named root values, replayable as a [`Provider`].
#[derive(Debug, Deserialize)]
pub struct Snapshot {
	/// Named type definitions in document order.
	#[serde(default)]
	pub types: IndexMap<String, TypeDef>,
	/// Named captured values in document order.
	#[serde(default)]
	pub values: IndexMap<String, CapturedValue>,
	/// Compression the snapshot was stored with.
	#[serde(skip)]
	pub compression: Compression,
}

/// One type definition in a snapshot table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDef {
	/// Leaf type.
	Primitive(PrimitiveKind),
	/// Record with ordered fields.
	Struct(Vec<FieldDef>),
	/// Overlapping fields.
	Union(Vec<FieldDef>),
	/// Fixed-length array.
	Array {
		/// Element type.
		element: TypeRef,
		/// Element count.
		length: usize,
	},
	/// Typedef of another type.
	Alias(TypeRef),
}

/// Reference to a type: a table name or an inline definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
	/// Name looked up in the snapshot type table.
	Named(String),
	/// Anonymous definition written in place.
	Inline(Box<TypeDef>),
}

/// One field of a struct or union definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDef {
	/// Declared name; omitted for anonymous members.
	#[serde(default)]
	pub name: Option<String>,
	/// Declared type.
	#[serde(rename = "type")]
	pub ty: TypeRef,
}

/// Named root value: type plus captured data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CapturedValue {
	/// Declared type of the value.
	#[serde(rename = "type")]
	pub ty: TypeRef,
	/// Captured data shaped like the type.
	pub data: Datum,
}

/// Captured data for one value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Datum {
	/// Storage could not be read.
	Missing,
	/// Non-negative integer.
	Unsigned(u64),
	/// Negative integer.
	Signed(i64),
	/// Floating point number.
	Float(f64),
	/// Boolean.
	Bool(bool),
	/// Provider-rendered text.
	Text(String),
	/// Field datums of a struct/union or element datums of an array.
	Items(Vec<Datum>),
}

impl Snapshot {
	/// Read a snapshot file, inflating zstd input when detected.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Parse snapshot bytes, inflating zstd input when detected.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let mut snapshot: Self = serde_json::from_slice(&bytes)?;
		snapshot.compression = compression;
		Ok(snapshot)
	}

	/// Build a snapshot from an already-parsed JSON document.
	pub fn from_json(document: serde_json::Value) -> Result<Self> {
		Ok(serde_json::from_value(document)?)
	}

	/// Provider view over this snapshot's type table.
	pub fn provider(&self) -> SnapshotProvider<'_> {
		SnapshotProvider { types: &self.types }
	}

	/// Look up one captured value by name.
	pub fn value(&self, name: &str) -> Result<ValueRef<'_>> {
		let captured = self.values.get(name).ok_or_else(|| TreeError::UnknownValue { name: name.to_owned() })?;
		Ok(ValueRef::new(&captured.ty, &captured.data))
	}

	/// All captured values in document order.
	pub fn values(&self) -> impl Iterator<Item = (&str, ValueRef<'_>)> {
		self.values.iter().map(|(name, captured)| (name.as_str(), ValueRef::new(&captured.ty, &captured.data)))
	}
}

/// Borrowed handle to one value inside a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ValueRef<'a> {
	ty: &'a TypeRef,
	data: &'a Datum,
}

impl<'a> ValueRef<'a> {
	/// Pair a type with captured data.
	pub fn new(ty: &'a TypeRef, data: &'a Datum) -> Self {
		Self { ty, data }
	}

	/// Declared type, possibly an alias.
	pub fn ty(&self) -> &'a TypeRef {
		self.ty
	}

	/// Captured data.
	pub fn data(&self) -> &'a Datum {
		self.data
	}
}

/// [`Provider`] over a snapshot type table.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotProvider<'a> {
	types: &'a IndexMap<String, TypeDef>,
}

/// Type definition with aliases stripped.
#[derive(Debug, Clone, Copy)]
enum Resolved<'a> {
	Primitive(PrimitiveKind),
	Struct(&'a [FieldDef]),
	Union(&'a [FieldDef]),
	Array { element: &'a TypeRef, length: usize },
}

impl Resolved<'_> {
	fn kind(self) -> Kind {
		match self {
			Self::Primitive(primitive) => Kind::Primitive(primitive),
			Self::Struct(_) => Kind::Struct,
			Self::Union(_) => Kind::Union,
			Self::Array { .. } => Kind::Array,
		}
	}
}

impl<'a> SnapshotProvider<'a> {
	fn resolve(&self, ty: &'a TypeRef) -> Result<Resolved<'a>> {
		let mut current = ty;
		let mut named_hops = 0_usize;

		loop {
			let def: &'a TypeDef = match current {
				TypeRef::Named(name) => {
					named_hops += 1;
					if named_hops > self.types.len() {
						return Err(TreeError::AliasCycle { name: name.clone() });
					}
					self.types.get(name.as_str()).ok_or_else(|| TreeError::UnknownType { name: name.clone() })?
				}
				TypeRef::Inline(def) => def.as_ref(),
			};

			let resolved = match def {
				TypeDef::Primitive(primitive) => Resolved::Primitive(*primitive),
				TypeDef::Struct(fields) => Resolved::Struct(fields.as_slice()),
				TypeDef::Union(fields) => Resolved::Union(fields.as_slice()),
				TypeDef::Array { element, length } => Resolved::Array { element, length: *length },
				TypeDef::Alias(target) => {
					current = target;
					continue;
				}
			};
			return Ok(resolved);
		}
	}

	fn primitive(&self, value: &ValueRef<'a>, op: &'static str) -> Result<PrimitiveKind> {
		match self.resolve(value.ty)? {
			Resolved::Primitive(primitive) => Ok(primitive),
			other => Err(TreeError::InvalidOperation { op, kind: other.kind() }),
		}
	}
}

impl<'a> Provider for SnapshotProvider<'a> {
	type Value = ValueRef<'a>;
	type Type = &'a TypeRef;

	fn type_of(&self, value: &ValueRef<'a>) -> &'a TypeRef {
		value.ty
	}

	fn kind_of(&self, ty: &&'a TypeRef) -> Result<Kind> {
		Ok(self.resolve(*ty)?.kind())
	}

	fn fields_of(&self, ty: &&'a TypeRef) -> Result<Vec<FieldDescriptor<&'a TypeRef>>> {
		let fields = match self.resolve(*ty)? {
			Resolved::Struct(fields) | Resolved::Union(fields) => fields,
			other => return Err(TreeError::InvalidOperation { op: "fields_of", kind: other.kind() }),
		};

		Ok(fields
			.iter()
			.enumerate()
			.map(|(position, field)| FieldDescriptor {
				name: field.name.as_deref().map(Box::from),
				ty: &field.ty,
				position,
			})
			.collect())
	}

	fn field_value(&self, value: &ValueRef<'a>, field: &FieldDescriptor<&'a TypeRef>) -> Result<ValueRef<'a>> {
		let declared = match self.resolve(value.ty)? {
			Resolved::Struct(fields) | Resolved::Union(fields) => fields.len(),
			other => return Err(TreeError::InvalidOperation { op: "field_value", kind: other.kind() }),
		};

		let at = || match &field.name {
			Some(name) => format!("field {name}"),
			None => format!("field #{}", field.position),
		};
		let items = items_of(value.data, declared, at)?;
		let data = items.get(field.position).ok_or_else(|| TreeError::ProviderAccess {
			at: at(),
			reason: format!("position {} past {declared} declared fields", field.position),
		})?;

		Ok(ValueRef::new(field.ty, data))
	}

	fn element_type_and_length(&self, ty: &&'a TypeRef) -> Result<(&'a TypeRef, usize)> {
		match self.resolve(*ty)? {
			Resolved::Array { element, length } => Ok((element, length)),
			other => Err(TreeError::InvalidOperation {
				op: "element_type_and_length",
				kind: other.kind(),
			}),
		}
	}

	fn element_value(&self, value: &ValueRef<'a>, index: usize) -> Result<ValueRef<'a>> {
		let (element, length) = self.element_type_and_length(&value.ty)?;
		if index >= length {
			return Err(TreeError::ElementOutOfRange { index, length });
		}

		let items = items_of(value.data, length, || format!("element {index}"))?;
		Ok(ValueRef::new(element, &items[index]))
	}

	fn integer_value(&self, value: &ValueRef<'a>) -> Result<i128> {
		self.primitive(value, "integer_value")?;
		match value.data {
			Datum::Unsigned(raw) => Ok(i128::from(*raw)),
			Datum::Signed(raw) => Ok(i128::from(*raw)),
			Datum::Missing => Err(unavailable("integer")),
			other => Err(TreeError::ProviderAccess {
				at: "integer".to_owned(),
				reason: format!("expected integer datum, found {}", datum_label(other)),
			}),
		}
	}

	fn default_text(&self, value: &ValueRef<'a>) -> Result<String> {
		let primitive = self.primitive(value, "default_text")?;
		match value.data {
			Datum::Text(text) => Ok(text.clone()),
			Datum::Bool(flag) => Ok(flag.to_string()),
			Datum::Float(number) => Ok(number.to_string()),
			Datum::Unsigned(raw) => Ok(integer_text(primitive, i128::from(*raw))),
			Datum::Signed(raw) => Ok(integer_text(primitive, i128::from(*raw))),
			Datum::Missing => Err(unavailable(primitive.as_str())),
			Datum::Items(_) => Err(TreeError::ProviderAccess {
				at: primitive.as_str().to_owned(),
				reason: "expected scalar datum, found list".to_owned(),
			}),
		}
	}
}

fn items_of(data: &Datum, expected: usize, at: impl Fn() -> String) -> Result<&[Datum]> {
	match data {
		Datum::Items(items) if items.len() == expected => Ok(items),
		Datum::Items(items) => Err(TreeError::ProviderAccess {
			at: at(),
			reason: format!("expected {expected} datums, found {}", items.len()),
		}),
		Datum::Missing => Err(TreeError::ProviderAccess {
			at: at(),
			reason: "value unavailable".to_owned(),
		}),
		other => Err(TreeError::ProviderAccess {
			at: at(),
			reason: format!("expected list datum, found {}", datum_label(other)),
		}),
	}
}

fn integer_text(primitive: PrimitiveKind, raw: i128) -> String {
	match primitive {
		PrimitiveKind::Char => match u8::try_from(raw) {
			Ok(byte) if byte.is_ascii_graphic() || byte == b' ' => format!("{raw} '{}'", char::from(byte)),
			_ => raw.to_string(),
		},
		PrimitiveKind::Bool => (raw != 0).to_string(),
		PrimitiveKind::Pointer => format!("0x{raw:x}"),
		PrimitiveKind::Int | PrimitiveKind::Enum | PrimitiveKind::Float => raw.to_string(),
	}
}

fn unavailable(at: &str) -> TreeError {
	TreeError::ProviderAccess {
		at: at.to_owned(),
		reason: "value unavailable".to_owned(),
	}
}

fn datum_label(datum: &Datum) -> &'static str {
	match datum {
		Datum::Missing => "null",
		Datum::Unsigned(_) | Datum::Signed(_) => "integer",
		Datum::Float(_) => "float",
		Datum::Bool(_) => "bool",
		Datum::Text(_) => "text",
		Datum::Items(_) => "list",
	}
}
