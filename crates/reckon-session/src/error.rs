//! Error types for session persistence and replay.

use std::fmt;

use reckon_core::{ConsoleError, StorageError};

/// Errors from decoding a session blob.
///
/// None of these reach the user:
/// [`SessionState::load_or_default`](crate::state::SessionState::load_or_default)
/// recovers from any decode failure by starting a fresh session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The blob does not start with the expected `b"RKON"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the blob.
        found: u8,
    },
    /// The blob ended before a field was complete.
    Truncated {
        /// Bytes the field needed.
        needed: usize,
        /// Bytes that remained.
        remaining: usize,
    },
    /// A field could not be decoded (bad UTF-8, bad presence flag).
    MalformedRecord {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// Decoding finished with unconsumed bytes left in the blob.
    TrailingBytes {
        /// Number of unconsumed bytes.
        count: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"RKON\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported blob format version {found}")
            }
            Self::Truncated { needed, remaining } => {
                write!(f, "truncated blob: needed {needed} bytes, {remaining} remained")
            }
            Self::MalformedRecord { detail } => write!(f, "malformed record: {detail}"),
            Self::TrailingBytes { count } => {
                write!(f, "{count} trailing bytes after the record")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Errors from the replay-mediated console.
///
/// Both variants are fatal to the session; the current snapshot is left in
/// storage so the next start resumes from it.
#[derive(Debug)]
pub enum SessionError {
    /// The underlying console failed.
    Console(ConsoleError),
    /// The storage adapter failed while persisting a snapshot.
    Storage(StorageError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console(e) => write!(f, "console: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Console(e) => Some(e),
            Self::Storage(e) => Some(e),
        }
    }
}

impl From<ConsoleError> for SessionError {
    fn from(e: ConsoleError) -> Self {
        Self::Console(e)
    }
}

impl From<StorageError> for SessionError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}
