//! Core streaming reader - FileChunker with a block-at-a-time API.
//!
//! This module implements the stateful half of the chunker:
//!
//! - [`FileChunker::open`] - Validates the config, pads the file on disk,
//!   and opens the read handle
//! - [`FileChunker::produce_next_block`] - Emits the next block of symbols
//! - [`FileChunker::release`] - Restores the file to its original length
//!
//! # Example
//!
//! ```no_run
//! use blockrs::{ChunkConfig, FileChunker};
//!
//! let config = ChunkConfig::new(16, 1024)?;
//! let mut chunker = FileChunker::open("data.bin", config)?;
//!
//! while let Some(block) = chunker.produce_next_block()? {
//!     println!("block {}: {} symbols", block.id(), block.len());
//! }
//! # Ok::<(), blockrs::ChunkError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::block::{SourceBlock, Symbol};
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::geometry::Geometry;

/// Outcome of a teardown pass.
///
/// Teardown is best-effort: failures are logged and reported here rather
/// than propagated, since release typically runs on a cleanup path where the
/// caller has no further recourse.
#[derive(Debug)]
pub enum Teardown {
    /// The read handle was closed and the file restored to its original
    /// length (or there was nothing left to do).
    Clean,

    /// Cleanup hit an I/O error; the file may still carry its padding. The
    /// error has already been logged.
    Soft(std::io::Error),
}

impl Teardown {
    /// Returns true if cleanup fully succeeded.
    pub fn is_clean(&self) -> bool {
        matches!(self, Teardown::Clean)
    }
}

/// A chunker that streams fixed-geometry source blocks from a file.
///
/// `FileChunker` owns the open read handle exclusively. Construction pads
/// the physical file with zero bytes so its length becomes an exact multiple
/// of the block size; the padding is truncated away again when the stream is
/// exhausted, when [`FileChunker::release`] is called, or when the chunker
/// is dropped - whichever comes first.
///
/// # Block emission
///
/// Blocks are tagged with ids `0, 1, ...` in strictly increasing order with
/// no gaps. Every symbol is exactly `symbol_size` bytes; the padding scheme
/// guarantees no partial symbol can ever be read. Only the final block
/// (`id == total_blocks - 1`) carries a non-zero `padding` count.
///
/// # Exclusive access
///
/// The padded length is visible to any other process reading the file
/// concurrently. The chunker must be the sole writer of the path for the
/// whole session, and a crash between setup and teardown leaves the file
/// padded - recovery of the original length is the caller's concern.
///
/// # Example
///
/// ```no_run
/// use blockrs::{ChunkConfig, FileChunker};
///
/// let mut chunker = FileChunker::open("data.bin", ChunkConfig::new(2, 8)?)?;
///
/// // FileChunker is also an iterator over Result<SourceBlock, ChunkError>
/// for block in &mut chunker {
///     let block = block?;
///     println!("{}", block);
/// }
/// # Ok::<(), blockrs::ChunkError>(())
/// ```
#[derive(Debug)]
pub struct FileChunker {
    path: PathBuf,
    config: ChunkConfig,
    geometry: Geometry,
    reader: Option<File>,
    offset: u64,
    next_block_id: u64,
    padding_removed: bool,
}

impl FileChunker {
    /// Opens a chunking session on `path`.
    ///
    /// Validates the configuration, captures the file size, derives the
    /// block geometry, appends the required zero padding (flushed durable),
    /// and opens a fresh read handle at offset 0.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::InvalidConfig`] if the configuration is invalid; the
    ///   file has not been touched.
    /// - [`ChunkError::FileAccess`] if the file cannot be statted, padded,
    ///   or opened for reading.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use blockrs::{ChunkConfig, FileChunker};
    ///
    /// let chunker = FileChunker::open("data.bin", ChunkConfig::default())?;
    /// assert_eq!(chunker.geometry().padded_size() % chunker.geometry().block_size(), 0);
    /// # Ok::<(), blockrs::ChunkError>(())
    /// ```
    pub fn open(path: impl AsRef<Path>, config: ChunkConfig) -> Result<Self, ChunkError> {
        // Validate before any file mutation.
        config.validate()?;

        let path = path.as_ref().to_path_buf();
        let file_size = fs::metadata(&path)
            .map_err(|e| ChunkError::FileAccess {
                path: path.clone(),
                source: e,
            })?
            .len();

        let geometry = Geometry::for_file_size(&config, file_size);

        if geometry.padding() > 0 {
            if let Err(e) = append_zero_padding(&path, geometry.padding()) {
                // A partial append must not leave the file grown.
                restore_length(&path, geometry.file_size());
                return Err(e);
            }
        }

        let reader = match File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                // Construction failed partway: do not leave the file padded.
                if geometry.padding() > 0 {
                    restore_length(&path, geometry.file_size());
                }
                return Err(ChunkError::FileAccess { path, source: e });
            }
        };

        Ok(Self {
            path,
            config,
            geometry,
            reader: Some(reader),
            offset: 0,
            next_block_id: 0,
            padding_removed: geometry.padding() == 0,
        })
    }

    /// Produces the next source block, or `Ok(None)` at end of stream.
    ///
    /// Fills the block with up to `symbols_per_block` symbols. When the
    /// padded file is exhausted mid-block, teardown runs inline (the handle
    /// is closed and the padding truncated away) and the partially filled
    /// block is returned as long as it holds at least one symbol. A block
    /// that accumulated nothing is reported as end of stream instead.
    ///
    /// Calling this after the stream has ended is a no-op returning
    /// `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::Io`] if a read fails mid-stream. A file that
    /// shrinks underneath the session ends the stream early instead of
    /// erroring.
    pub fn produce_next_block(&mut self) -> Result<Option<SourceBlock>, ChunkError> {
        if self.reader.is_none() {
            return Ok(None);
        }

        let mut block = SourceBlock::new(self.take_block_id());

        while block.len() < self.config.symbols_per_block() {
            match self.read_symbol()? {
                Some(symbol) => block.push(symbol),
                None => {
                    // Underlying padded file exhausted: teardown inline.
                    self.teardown();
                    break;
                }
            }
        }

        if block.is_empty() {
            return Ok(None);
        }

        if Some(block.id) == self.geometry.last_block_id() {
            block.padding = self.geometry.padding();
        }

        Ok(Some(block))
    }

    /// Restores the file to its original length and closes the handle.
    ///
    /// Idempotent: releasing twice (or after the stream already tore itself
    /// down) does nothing further and reports [`Teardown::Clean`]. Failures
    /// are logged and surfaced as [`Teardown::Soft`], never propagated.
    pub fn release(&mut self) -> Teardown {
        self.teardown()
    }

    /// Returns the configuration for this session.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Returns the derived geometry for this session.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the path being chunked.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes and returns the next block id.
    fn take_block_id(&mut self) -> u64 {
        let id = self.next_block_id;
        self.next_block_id += 1;
        id
    }

    /// Reads exactly one symbol, or signals exhaustion.
    ///
    /// Remaining bytes are computed against the padded length, so a read
    /// either fills a whole `symbol_size` buffer or returns `None`; partial
    /// symbols cannot occur unless the file shrinks underneath us, which
    /// also ends the stream.
    fn read_symbol(&mut self) -> Result<Option<Symbol>, ChunkError> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let remaining = self.geometry.padded_size().saturating_sub(self.offset);
        if remaining == 0 {
            return Ok(None);
        }

        let mut buf = vec![0u8; self.config.symbol_size()];
        match reader.read_exact(&mut buf) {
            Ok(()) => {
                self.offset += buf.len() as u64;
                Ok(Some(Symbol::from(buf)))
            }
            // The file ended before the padded length: concurrent truncation.
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Closes the read handle and truncates the padding away.
    ///
    /// Safe to call repeatedly and safe at any point of the lifecycle; every
    /// step is best-effort and the first failure is reported softly.
    fn teardown(&mut self) -> Teardown {
        let mut soft: Option<std::io::Error> = None;

        if let Some(reader) = self.reader.take() {
            if let Err(e) = reader.sync_all() {
                tracing::warn!(
                    "failed to sync {} during teardown: {}",
                    self.path.display(),
                    e
                );
                soft.get_or_insert(e);
            }
        }

        if !self.padding_removed {
            self.padding_removed = true;
            if let Some(e) = restore_length(&self.path, self.geometry.file_size()) {
                soft.get_or_insert(e);
            }
        }

        match soft {
            None => Teardown::Clean,
            Some(e) => Teardown::Soft(e),
        }
    }
}

impl Iterator for FileChunker {
    type Item = Result<SourceBlock, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next_block().transpose()
    }
}

impl Drop for FileChunker {
    fn drop(&mut self) {
        // Any failure has already been logged; a drop path cannot act on it.
        let _ = self.teardown();
    }
}

/// Appends `padding` zero bytes to the file and flushes them durable.
fn append_zero_padding(path: &Path, padding: u64) -> Result<(), ChunkError> {
    let file_access = |e: std::io::Error| ChunkError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(file_access)?;

    // padding < block_size, so this buffer stays small.
    file.write_all(&vec![0u8; padding as usize])
        .map_err(file_access)?;
    file.sync_all().map_err(file_access)?;

    Ok(())
}

/// Truncates the file back to `len` bytes via a fresh write handle.
///
/// Returns the error instead of propagating it; callers log and move on.
fn restore_length(path: &Path, len: u64) -> Option<std::io::Error> {
    let result = OpenOptions::new()
        .write(true)
        .open(path)
        .and_then(|f| f.set_len(len));

    if let Err(e) = result {
        tracing::warn!(
            "failed to restore {} to {} bytes: {}",
            path.display(),
            len,
            e
        );
        return Some(e);
    }
    None
}
