use crate::tree::provider::kind_of_value;
use crate::tree::{Kind, PrimitiveKind, Provider, Result, TreeError};

/// Render a primitive value as its canonical leaf text.
///
/// Integers use [`format_hex`] on the provider's integer interpretation; every
/// other primitive passes the provider's default text through unchanged.
pub fn render_primitive<P: Provider + ?Sized>(provider: &P, value: &P::Value) -> Result<String> {
	match kind_of_value(provider, value)? {
		Kind::Primitive(PrimitiveKind::Int) => Ok(format_hex(provider.integer_value(value)?)),
		Kind::Primitive(_) => provider.default_text(value),
		kind @ (Kind::Struct | Kind::Union | Kind::Array) => Err(TreeError::InvalidOperation { op: "render_primitive", kind }),
	}
}

/// Lowercase `0x`-prefixed hex; negative values keep a leading `-`.
pub fn format_hex(value: i128) -> String {
	if value < 0 {
		format!("-0x{:x}", value.unsigned_abs())
	} else {
		format!("0x{value:x}")
	}
}
