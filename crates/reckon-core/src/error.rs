//! Error types for the console and storage capabilities.

use std::fmt;
use std::io;

/// Errors from a [`Console`](crate::traits::Console) implementation.
#[derive(Debug)]
pub enum ConsoleError {
    /// An I/O error occurred while reading or writing.
    Io(io::Error),
    /// The input stream is closed (end of input).
    Closed,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "console I/O error: {e}"),
            Self::Closed => write!(f, "console input closed"),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Closed => None,
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors from a [`Storage`](crate::traits::Storage) implementation.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing the blob.
    Io(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage I/O error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
