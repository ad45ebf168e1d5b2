//! The SourceBlock type - the artifact handed to the encoder.

use std::fmt;

use super::Symbol;

/// An ordered group of symbols, the unit streamed to the encoding collaborator.
///
/// Blocks are tagged with a stream position `id` assigned in strictly
/// increasing order starting at 0, with no gaps. Only the final block of a
/// stream carries a non-zero `padding`: the total number of zero-fill bytes
/// logically appended to the file so every symbol could be read at full size.
///
/// # Example
///
/// ```
/// use blockrs::{SourceBlock, Symbol};
///
/// let mut block = SourceBlock::new(0);
/// block.push(Symbol::new(vec![0u8; 8]));
///
/// assert_eq!(block.id(), 0);
/// assert_eq!(block.len(), 1);
/// assert_eq!(block.padding(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct SourceBlock {
    /// Position of this block in the stream.
    pub id: u64,

    /// Ordered symbols, each exactly `symbol_size` bytes.
    pub symbols: Vec<Symbol>,

    /// Zero-fill bytes logically present in this block; non-zero only on the
    /// final block of a stream, where it records the session's total padding.
    pub padding: u64,
}

impl SourceBlock {
    /// Creates an empty block with the given stream position.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            symbols: Vec::new(),
            padding: 0,
        }
    }

    /// Appends a symbol to the block.
    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Returns the stream position of this block.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the number of symbols in the block.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the block holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the padding byte count carried by this block.
    pub fn padding(&self) -> u64 {
        self.padding
    }

    /// Returns the symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Consumes the block and returns its symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }
}

impl fmt::Display for SourceBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceBlock(id={}, {} symbols", self.id, self.len())?;
        if self.padding > 0 {
            write!(f, ", {} padding bytes", self.padding)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_is_empty() {
        let block = SourceBlock::new(3);
        assert_eq!(block.id(), 3);
        assert!(block.is_empty());
        assert_eq!(block.padding(), 0);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut block = SourceBlock::new(0);
        block.push(Symbol::new(&b"aaaaaaaa"[..]));
        block.push(Symbol::new(&b"bbbbbbbb"[..]));

        assert_eq!(block.len(), 2);
        assert_eq!(block.symbols()[0].as_bytes(), b"aaaaaaaa");
        assert_eq!(block.symbols()[1].as_bytes(), b"bbbbbbbb");
    }

    #[test]
    fn test_into_symbols() {
        let mut block = SourceBlock::new(0);
        block.push(Symbol::new(vec![0u8; 8]));
        let symbols = block.into_symbols();
        assert_eq!(symbols.len(), 1);
    }

    #[test]
    fn test_display() {
        let mut block = SourceBlock::new(7);
        block.push(Symbol::new(vec![0u8; 8]));
        let s = block.to_string();
        assert!(s.contains("id=7"));
        assert!(s.contains("1 symbols"));
        assert!(!s.contains("padding"));

        block.padding = 6;
        assert!(block.to_string().contains("6 padding bytes"));
    }
}
