//! The Symbol type.

use bytes::Bytes;
use std::fmt;

/// A fixed-size binary unit, the smallest chunk read from the file.
///
/// Every symbol produced by one chunking session has exactly the same length
/// (`symbol_size` bytes); the on-disk padding scheme guarantees no partial
/// symbols exist. The buffer is a [`Bytes`] handle, so cloning a symbol is
/// cheap and does not copy the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol(Bytes);

impl Symbol {
    /// Creates a symbol from a byte buffer.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    /// Returns the symbol length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the symbol holds no data.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the symbol payload as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the symbol and returns the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for Symbol {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for Symbol {
    fn from(data: Bytes) -> Self {
        Self(data)
    }
}

impl From<Vec<u8>> for Symbol {
    fn from(data: Vec<u8>) -> Self {
        Self(Bytes::from(data))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({} bytes)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let symbol = Symbol::new(vec![0u8; 8]);
        assert_eq!(symbol.len(), 8);
        assert!(!symbol.is_empty());
    }

    #[test]
    fn test_as_bytes() {
        let symbol = Symbol::new(&b"01234567"[..]);
        assert_eq!(symbol.as_bytes(), b"01234567");
    }

    #[test]
    fn test_into_bytes() {
        let symbol = Symbol::new(&b"01234567"[..]);
        let bytes = symbol.into_bytes();
        assert_eq!(&bytes[..], b"01234567");
    }

    #[test]
    fn test_from_vec() {
        let symbol: Symbol = vec![1u8, 2, 3, 4, 5, 6, 7, 8].into();
        assert_eq!(symbol.len(), 8);
    }

    #[test]
    fn test_clone_is_cheap_handle() {
        let symbol = Symbol::new(Bytes::from_static(b"01234567"));
        let copy = symbol.clone();
        assert_eq!(symbol.as_bytes().as_ptr(), copy.as_bytes().as_ptr());
    }

    #[test]
    fn test_display() {
        let symbol = Symbol::new(vec![0u8; 16]);
        assert_eq!(symbol.to_string(), "Symbol(16 bytes)");
    }
}
