use std::path::PathBuf;

use valtree::tree::{Kind, Provider, Result, Snapshot, SnapshotProvider, TypeRef};

/// Print snapshot statistics and optionally one resolved type.
pub fn run(path: PathBuf, type_name: Option<String>) -> Result<()> {
	let snapshot = Snapshot::open(&path)?;

	println!("path: {}", path.display());
	println!("compression: {}", snapshot.compression.as_str());
	println!("types: {}", snapshot.types.len());
	println!("values: {}", snapshot.values.len());

	if let Some(name) = type_name {
		let ty = TypeRef::Named(name);
		let provider = snapshot.provider();
		let kind = provider.kind_of(&&ty)?;

		println!("type: {}", type_label(&provider, &ty)?);
		println!("kind: {kind}");
		match kind {
			Kind::Struct | Kind::Union => {
				let fields = provider.fields_of(&&ty)?;
				println!("field_count: {}", fields.len());
				for field in &fields {
					println!("  {} {}", type_label(&provider, field.ty)?, field.name.as_deref().unwrap_or("<anonymous>"));
				}
			}
			Kind::Array => {
				let (element, length) = provider.element_type_and_length(&&ty)?;
				println!("element: {}", type_label(&provider, element)?);
				println!("length: {length}");
			}
			Kind::Primitive(_) => {}
		}
	}

	Ok(())
}

fn type_label<'a>(provider: &SnapshotProvider<'a>, ty: &'a TypeRef) -> Result<String> {
	match ty {
		TypeRef::Named(name) => Ok(name.clone()),
		TypeRef::Inline(_) => Ok(format!("<inline {}>", provider.kind_of(&ty)?)),
	}
}
