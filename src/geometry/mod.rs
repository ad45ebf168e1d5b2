//! Derived block geometry for a chunking session.
//!
//! [`Geometry`] is the pure half of the chunker: given a validated
//! [`ChunkConfig`](crate::ChunkConfig) and a file size it derives the block
//! size, the total block count, and the padding the file needs so its length
//! becomes an exact multiple of the block size. It performs no I/O.

use crate::config::ChunkConfig;

/// Block geometry derived from a configuration and a file size.
///
/// All four values are fixed at construction and never change for the
/// lifetime of a session. For a given `(file_size, config)` pair the derived
/// values are a pure function with no randomness:
///
/// - `total_blocks = ceil(file_size / block_size)`
/// - `padding` is the smallest non-negative value making
///   `file_size + padding` a multiple of `block_size`
///
/// # Example
///
/// ```
/// use blockrs::{ChunkConfig, Geometry};
///
/// let config = ChunkConfig::new(2, 8)?;
/// let geometry = Geometry::for_file_size(&config, 10);
///
/// assert_eq!(geometry.block_size(), 16);
/// assert_eq!(geometry.total_blocks(), 1);
/// assert_eq!(geometry.padding(), 6);
/// # Ok::<(), blockrs::ChunkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Block size in bytes.
    block_size: u64,

    /// Original file size in bytes, captured once at construction.
    file_size: u64,

    /// Total number of blocks the file divides into.
    total_blocks: u64,

    /// Zero-fill bytes appended to the file for the session.
    padding: u64,
}

impl Geometry {
    /// Derives the geometry for a file of `file_size` bytes.
    ///
    /// The configuration must already be validated; geometry derivation
    /// itself cannot fail.
    pub fn for_file_size(config: &ChunkConfig, file_size: u64) -> Self {
        let block_size = config.block_size() as u64;
        let total_blocks = file_size.div_ceil(block_size);
        // Zero when the file is already an exact multiple (including empty).
        let padding = (block_size - file_size % block_size) % block_size;

        Self {
            block_size,
            file_size,
            total_blocks,
            padding,
        }
    }

    /// Returns the block size in bytes.
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Returns the original file size in bytes.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Returns the total number of blocks in the stream.
    pub fn total_blocks(&self) -> u64 {
        self.total_blocks
    }

    /// Returns the number of zero-fill bytes appended for the session.
    pub fn padding(&self) -> u64 {
        self.padding
    }

    /// Returns the on-disk length of the file while the session is active.
    ///
    /// Always an exact multiple of the block size.
    pub fn padded_size(&self) -> u64 {
        self.file_size + self.padding
    }

    /// Returns the id of the last block, or `None` for an empty file.
    pub fn last_block_id(&self) -> Option<u64> {
        self.total_blocks.checked_sub(1)
    }
}
