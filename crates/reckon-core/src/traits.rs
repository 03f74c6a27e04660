//! Capability traits for the console and storage collaborators.

use crate::error::{ConsoleError, StorageError};

/// A line-oriented console.
///
/// Implemented by the process stdin/stdout adapter in production and by
/// scripted doubles in tests. The replay-mediated console in
/// `reckon-session` composes over any implementation of this trait.
pub trait Console {
    /// Read one line of input, without the trailing newline.
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// Whole-blob byte storage with atomic replacement.
///
/// The blob is opaque at this level. An empty blob means the storage has
/// never been written, or was cleared. Partial writes are the
/// implementation's concern: a `write` either fully replaces the blob or
/// leaves the previous one intact.
pub trait Storage {
    /// Read the entire current blob. Empty when never written or cleared.
    fn read(&mut self) -> Result<Vec<u8>, StorageError>;

    /// Atomically replace the blob with `bytes`.
    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError>;
}
