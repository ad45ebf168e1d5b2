//! Error types for blockrs.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while chunking a file.
#[derive(Debug)]
pub enum ChunkError {
    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The target file could not be statted, opened, or padded at
    /// construction time.
    FileAccess {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O error occurred while reading symbols mid-stream.
    Io(std::io::Error),
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            ChunkError::FileAccess { path, source } => {
                write!(f, "cannot access {}: {}", path.display(), source)
            }
            ChunkError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for ChunkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChunkError::FileAccess { source, .. } => Some(source),
            ChunkError::Io(e) => Some(e),
            ChunkError::InvalidConfig { .. } => None,
        }
    }
}

impl From<std::io::Error> for ChunkError {
    fn from(e: std::io::Error) -> Self {
        ChunkError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ChunkError = io_err.into();
        assert!(matches!(err, ChunkError::Io(_)));
    }

    #[test]
    fn test_display() {
        let err = ChunkError::InvalidConfig {
            message: "symbol size must be a multiple of 8",
        };
        assert!(err.to_string().contains("invalid config"));

        let err = ChunkError::FileAccess {
            path: PathBuf::from("/no/such/file"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/no/such/file"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = ChunkError::FileAccess {
            path: PathBuf::from("x"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());

        let err = ChunkError::InvalidConfig { message: "bad" };
        assert!(err.source().is_none());
    }
}
