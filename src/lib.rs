//! blockrs
//!
//! Deterministic fixed-geometry file chunking for erasure/network coding.
//!
//! `blockrs` partitions an on-disk file into a sequence of fixed-size
//! **blocks**, each an ordered group of fixed-size **symbols**, and streams
//! them to a downstream encoder. Erasure coders want every symbol to be
//! exactly the same length, so the file is transparently zero-padded on disk
//! until its length is an exact multiple of the block size; the original
//! length is restored when the session ends.
//!
//! The crate intentionally:
//! - does NOT implement the erasure code itself
//! - does NOT manage network transport
//! - does NOT handle directories or multiple files
//!
//! It only does one thing: **file in → source blocks out**
//!
//! # Example
//!
//! ```no_run
//! use blockrs::{ChunkConfig, FileChunker};
//!
//! fn main() -> Result<(), blockrs::ChunkError> {
//!     let config = ChunkConfig::new(16, 1024)?;
//!     let mut chunker = FileChunker::open("data.bin", config)?;
//!
//!     while let Some(block) = chunker.produce_next_block()? {
//!         println!("block {}: {} symbols, {} padding bytes",
//!             block.id(), block.len(), block.padding());
//!     }
//!
//!     // The file length is restored once the stream is exhausted;
//!     // release() is idempotent and also runs on drop.
//!     chunker.release();
//!     Ok(())
//! }
//! ```
//!
//! # Exclusive access
//!
//! Padding is a destructive-but-reversible mutation of the target file. The
//! chunker must be the sole writer of the path for the whole session: the
//! grown length is observable to any concurrent reader, and a crash between
//! setup and release leaves the padding in place.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod chunker;
mod config;
mod error;
mod geometry;

//
// Public surface (intentionally tiny)
//

pub use block::{SourceBlock, Symbol};
pub use chunker::{FileChunker, Teardown};
pub use config::{ChunkConfig, DEFAULT_SYMBOL_SIZE, DEFAULT_SYMBOLS_PER_BLOCK, SYMBOL_ALIGNMENT};
pub use error::ChunkError;
pub use geometry::Geometry;
