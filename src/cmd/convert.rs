use std::path::PathBuf;

use log::debug;
use valtree::tree::{Object, OutputNode, Result, Snapshot, TreeError, convert_to_tree};

/// Convert captured values and print the resulting tree as JSON.
pub fn run(path: PathBuf, value: Option<String>, compact: bool) -> Result<()> {
	let snapshot = Snapshot::open(&path)?;
	debug!(
		"loaded {} (compression={}, types={}, values={})",
		path.display(),
		snapshot.compression.as_str(),
		snapshot.types.len(),
		snapshot.values.len()
	);

	let tree = match value {
		Some(name) => convert_to_tree(&snapshot.provider(), &snapshot.value(&name)?)?,
		None => convert_all(&snapshot)?,
	};

	let text = if compact { serde_json::to_string(&tree)? } else { serde_json::to_string_pretty(&tree)? };
	println!("{text}");

	Ok(())
}

/// Convert the only value, or every value keyed by name when there are several.
fn convert_all(snapshot: &Snapshot) -> Result<OutputNode> {
	let provider = snapshot.provider();
	let mut values = snapshot.values();

	match (values.next(), values.next()) {
		(None, _) => Err(TreeError::ValueSelection {
			reason: "snapshot holds no values".to_owned(),
		}),
		(Some((_, only)), None) => convert_to_tree(&provider, &only),
		_ => {
			let mut out = Object::with_capacity(snapshot.values.len());
			for (name, value) in snapshot.values() {
				debug!("converting value {name}");
				out.insert(name.to_owned(), convert_to_tree(&provider, &value)?)?;
			}
			Ok(OutputNode::Object(out))
		}
	}
}
