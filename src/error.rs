//! Error types for table generation and persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, loading or saving a ByteMap
#[derive(Debug, Error)]
pub enum TableError {
    /// Cached table could not be read (missing file, permission, I/O failure)
    #[error("Failed to read cached table {path}: {source}")]
    StorageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Cached table exists but has the wrong length
    #[error("Cached table {path} has {actual} bytes, expected {expected}")]
    TruncatedCache {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// Table could not be persisted
    #[error("Failed to write table to {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Round count must be at least 1 and fit in a `u32`
    #[error("Invalid round count {0}: must be between 1 and {max}", max = u32::MAX)]
    InvalidRoundCount(i64),

    /// Map size must be a power of two of at least 256 bytes
    #[error("Invalid map size {0}: must be a power of two and at least 256")]
    InvalidMapSize(usize),

    /// Byte buffer does not match the table size
    #[error("Table length mismatch: got {actual} bytes, expected {expected}")]
    InvalidTableLength { expected: usize, actual: usize },

    /// Seed string could not be parsed
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}

impl TableError {
    /// Whether this error is a cache miss that regeneration can recover from
    pub fn is_recoverable_read(&self) -> bool {
        matches!(
            self,
            TableError::StorageRead { .. } | TableError::TruncatedCache { .. }
        )
    }
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
