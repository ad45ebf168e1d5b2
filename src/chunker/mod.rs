//! Streaming reader for producing source blocks from a file.
//!
//! - [`FileChunker`] - Owns the file handle, pads/unpads the file on disk,
//!   and emits blocks in id order
//! - [`Teardown`] - Outcome of the best-effort cleanup pass

mod reader;

pub use reader::{FileChunker, Teardown};
