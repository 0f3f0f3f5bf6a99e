//! Snapshot files may be stored as a single zstd frame around the JSON
//! document. The frame is detected by its magic bytes; anything else is
//! handed to the JSON parser unchanged.

use std::io::Read;

use crate::tree::{Result, TreeError};

/// Upper bound on an inflated snapshot document.
const MAX_SNAPSHOT_BYTES: u64 = 512 * 1024 * 1024;
/// zstd frame magic used by compressed snapshot files.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// How a snapshot file was stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
	/// Plain JSON text.
	#[default]
	None,
	/// JSON inside one zstd frame.
	Zstd,
}

impl Compression {
	/// Label shown by `valtree types`.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}

	/// Sniff the storage mode from the leading bytes of a snapshot file.
	pub fn detect(raw: &[u8]) -> Self {
		if raw.starts_with(&ZSTD_MAGIC) { Self::Zstd } else { Self::None }
	}
}

/// Return the storage mode and the JSON document bytes of a snapshot file.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	match Compression::detect(&raw) {
		Compression::Zstd => Ok((Compression::Zstd, inflate_snapshot(&raw)?)),
		Compression::None => Ok((Compression::None, raw)),
	}
}

fn inflate_snapshot(raw: &[u8]) -> Result<Vec<u8>> {
	let decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut document = Vec::new();
	decoder.take(MAX_SNAPSHOT_BYTES + 1).read_to_end(&mut document)?;

	if document.len() as u64 > MAX_SNAPSHOT_BYTES {
		return Err(TreeError::DecompressedTooLarge { limit: MAX_SNAPSHOT_BYTES });
	}
	Ok(document)
}
