use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use crate::tree::{Result, TreeError};

/// Generic output tree produced by value conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputNode {
	/// Canonical text of a primitive leaf.
	Scalar(String),
	/// Struct or union contents keyed by field.
	Object(Object),
	/// Array contents in index order.
	Sequence(Vec<OutputNode>),
}

impl OutputNode {
	/// Borrow scalar text, if this node is a leaf.
	pub fn as_scalar(&self) -> Option<&str> {
		match self {
			Self::Scalar(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow object entries, if this node is an object.
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Self::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Borrow sequence items, if this node is a sequence.
	pub fn as_sequence(&self) -> Option<&[OutputNode]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Render as an order-preserving JSON value.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Scalar(text) => serde_json::Value::String(text.clone()),
			Self::Object(object) => serde_json::Value::Object(object.iter().map(|(key, node)| (key.to_owned(), node.to_json())).collect()),
			Self::Sequence(items) => serde_json::Value::Array(items.iter().map(OutputNode::to_json).collect()),
		}
	}
}

/// Insertion-ordered mapping with unique keys.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Object(IndexMap<String, OutputNode>);

impl Object {
	/// Create an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty object with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self(IndexMap::with_capacity(capacity))
	}

	/// Append an entry; fails if `key` is already present.
	pub fn insert(&mut self, key: String, node: OutputNode) -> Result<()> {
		match self.0.entry(key) {
			Entry::Occupied(entry) => Err(TreeError::DuplicateKey { key: entry.key().clone() }),
			Entry::Vacant(entry) => {
				entry.insert(node);
				Ok(())
			}
		}
	}

	/// Look up one entry by key.
	pub fn get(&self, key: &str) -> Option<&OutputNode> {
		self.0.get(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the object has no entries.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputNode)> {
		self.0.iter().map(|(key, node)| (key.as_str(), node))
	}
}

impl PartialEq for Object {
	fn eq(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
	}
}
