//! Convert typed runtime values exposed by an inspection host into JSON-compatible trees.

/// Provider contract, value-to-tree conversion, output tree, and snapshot provider.
pub mod tree;
