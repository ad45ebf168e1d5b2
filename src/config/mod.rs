//! Configuration for block geometry.
//!
//! This module provides [`ChunkConfig`], which fixes the two numbers the
//! whole session is derived from:
//!
//! - `symbols_per_block` (k) - How many symbols make up one block
//! - `symbol_size` - How many bytes make up one symbol
//!
//! # Example
//!
//! ```
//! use blockrs::ChunkConfig;
//!
//! // 16 symbols of 1 KiB each -> 16 KiB blocks
//! let config = ChunkConfig::new(16, 1024)?;
//! assert_eq!(config.block_size(), 16 * 1024);
//! # Ok::<(), blockrs::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Required alignment for symbol sizes, in bytes.
///
/// Symbols are consumed by encoders that mix them as whole 64-bit words, so
/// a symbol must hold a whole number of them.
pub const SYMBOL_ALIGNMENT: usize = 8;

/// Default number of symbols per block.
pub const DEFAULT_SYMBOLS_PER_BLOCK: usize = 16;

/// Default symbol size (1 KiB).
pub const DEFAULT_SYMBOL_SIZE: usize = 1024;

/// Configuration for fixed-geometry chunking.
///
/// `ChunkConfig` fixes the block geometry for the lifetime of a chunking
/// session. Both parameters must be positive, and `symbol_size` must be a
/// multiple of [`SYMBOL_ALIGNMENT`] so a symbol always holds a whole number
/// of 64-bit words.
///
/// # Example
///
/// ```
/// use blockrs::ChunkConfig;
///
/// // Use default configuration
/// let config = ChunkConfig::default();
///
/// // Custom configuration
/// let config = ChunkConfig::new(4, 256)?;
///
/// // Builder pattern
/// let config = ChunkConfig::default()
///     .with_symbols_per_block(32)
///     .with_symbol_size(4096);
/// # Ok::<(), blockrs::ChunkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    /// Number of symbols per block (k).
    symbols_per_block: usize,

    /// Symbol size in bytes.
    symbol_size: usize,
}

impl ChunkConfig {
    /// Creates a new configuration with the specified geometry.
    ///
    /// # Arguments
    ///
    /// * `symbols_per_block` - Number of symbols per block (must be >= 1)
    /// * `symbol_size` - Symbol size in bytes (must be a positive multiple of 8)
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if:
    /// - `symbols_per_block` is zero
    /// - `symbol_size` is zero
    /// - `symbol_size` is not a multiple of [`SYMBOL_ALIGNMENT`]
    ///
    /// # Example
    ///
    /// ```
    /// use blockrs::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(2, 8)?;
    /// assert_eq!(config.symbols_per_block(), 2);
    /// assert_eq!(config.symbol_size(), 8);
    /// # Ok::<(), blockrs::ChunkError>(())
    /// ```
    pub fn new(symbols_per_block: usize, symbol_size: usize) -> Result<Self, ChunkError> {
        if symbols_per_block == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "symbols_per_block must be at least 1",
            });
        }

        if symbol_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "symbol_size must be non-zero",
            });
        }

        if symbol_size % SYMBOL_ALIGNMENT != 0 {
            return Err(ChunkError::InvalidConfig {
                message: "symbol_size must be a multiple of 8 bytes",
            });
        }

        Ok(Self {
            symbols_per_block,
            symbol_size,
        })
    }

    /// Sets the number of symbols per block.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ChunkConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use blockrs::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_symbols_per_block(32);
    /// assert_eq!(config.symbols_per_block(), 32);
    /// ```
    pub fn with_symbols_per_block(mut self, k: usize) -> Self {
        self.symbols_per_block = k;
        self
    }

    /// Sets the symbol size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ChunkConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use blockrs::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_symbol_size(4096);
    /// assert_eq!(config.symbol_size(), 4096);
    /// ```
    pub fn with_symbol_size(mut self, size: usize) -> Self {
        self.symbol_size = size;
        self
    }

    /// Returns the number of symbols per block.
    pub fn symbols_per_block(&self) -> usize {
        self.symbols_per_block
    }

    /// Returns the symbol size in bytes.
    pub fn symbol_size(&self) -> usize {
        self.symbol_size
    }

    /// Returns the block size in bytes (`symbol_size * symbols_per_block`).
    pub fn block_size(&self) -> usize {
        self.symbol_size * self.symbols_per_block
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use blockrs::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_symbol_size(7);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.symbols_per_block, self.symbol_size).map(|_| ())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            symbols_per_block: DEFAULT_SYMBOLS_PER_BLOCK,
            symbol_size: DEFAULT_SYMBOL_SIZE,
        }
    }
}
