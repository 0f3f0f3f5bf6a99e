use log::{debug, trace};

use crate::tree::provider::kind_of_value;
use crate::tree::render::render_primitive;
use crate::tree::{Kind, Object, OutputNode, Provider, Result, TreeError};

const UNNAMED_FIELD_PREFIX: &str = "::unnamed_field_";

/// Convert a struct or union root value into a complete output tree.
pub fn convert_to_tree<P: Provider + ?Sized>(provider: &P, root: &P::Value) -> Result<OutputNode> {
	let object = convert_container(provider, root)?;
	debug!("converted root into object with {} entries", object.len());
	Ok(OutputNode::Object(object))
}

/// Convert a struct or union value into an object keyed by field.
///
/// Container-valued fields get a `::struct`, `::union`, or `::array` key
/// suffix; primitive fields keep the bare key. Anonymous fields are keyed
/// `::unnamed_field_<i>` by declaration position.
pub fn convert_container<P: Provider + ?Sized>(provider: &P, value: &P::Value) -> Result<Object> {
	let ty = provider.type_of(value);
	let kind = provider.kind_of(&ty)?;
	if !kind.is_container() {
		return Err(TreeError::NotAContainer { kind });
	}

	let fields = provider.fields_of(&ty)?;
	let mut out = Object::with_capacity(fields.len());

	for (idx, field) in fields.iter().enumerate() {
		let key_base = field_key_base(field.name.as_deref(), idx);
		let field_value = provider.field_value(value, field)?;
		let field_kind = kind_of_value(provider, &field_value)?;
		trace!("field {key_base}: {field_kind}");

		let (key, node) = match field_kind {
			Kind::Struct => (tagged_key(key_base, "struct"), OutputNode::Object(convert_container(provider, &field_value)?)),
			Kind::Union => (tagged_key(key_base, "union"), OutputNode::Object(convert_container(provider, &field_value)?)),
			Kind::Array => (tagged_key(key_base, "array"), OutputNode::Sequence(convert_array(provider, &field_value)?)),
			Kind::Primitive(_) => (key_base, OutputNode::Scalar(render_primitive(provider, &field_value)?)),
		};
		out.insert(key, node)?;
	}

	Ok(out)
}

/// Convert any value into a node for a sequence slot, without key suffixes.
pub fn convert_element<P: Provider + ?Sized>(provider: &P, value: &P::Value) -> Result<OutputNode> {
	match kind_of_value(provider, value)? {
		Kind::Struct | Kind::Union => Ok(OutputNode::Object(convert_container(provider, value)?)),
		Kind::Array => Ok(OutputNode::Sequence(convert_array(provider, value)?)),
		Kind::Primitive(_) => Ok(OutputNode::Scalar(render_primitive(provider, value)?)),
	}
}

fn convert_array<P: Provider + ?Sized>(provider: &P, value: &P::Value) -> Result<Vec<OutputNode>> {
	let (_, length) = provider.element_type_and_length(&provider.type_of(value))?;
	trace!("array of {length} elements");

	// Declared length is provider data; grow as elements arrive.
	let mut items = Vec::new();
	for index in 0..length {
		let element = provider.element_value(value, index)?;
		items.push(convert_element(provider, &element)?);
	}
	Ok(items)
}

fn field_key_base(name: Option<&str>, idx: usize) -> String {
	match name {
		Some(name) => name.to_owned(),
		None => format!("{UNNAMED_FIELD_PREFIX}{idx}"),
	}
}

fn tagged_key(mut key_base: String, suffix: &str) -> String {
	key_base.push_str("::");
	key_base.push_str(suffix);
	key_base
}
