//! The durable session record and its persistence operations.

use std::collections::VecDeque;

use reckon_core::{Storage, StorageError};

use crate::codec::{decode_state, encode_state};

/// Snapshot of session progress, persisted after every observable
/// interaction.
///
/// A snapshot written mid-command records, in `queries_so_far`, exactly the
/// inputs the run has consumed, and in `lines_so_far` the count of output
/// lines it has emitted. [`load_or_default`](Self::load_or_default)
/// reinterprets those as the next run's replay queue and skip counter, which
/// is what makes resumption transparent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Input lines recorded by the previous run of the current in-flight
    /// command. Drained from the front by the replay wrapper; never
    /// otherwise mutated after load.
    pub loaded_queries: VecDeque<String>,
    /// Input lines consumed by the current command in this run. Becomes
    /// `loaded_queries` at the next load.
    pub queries_so_far: VecDeque<String>,
    /// Output lines still to be silently discarded before live output
    /// resumes. Floors at zero.
    pub lines_to_skip: u32,
    /// Output lines emitted by the current command in this run.
    pub lines_so_far: u32,
    /// State of the pseudo-random stream. Survives across commands and
    /// restarts; absent until the first session seeds it.
    pub last_random: Option<i64>,
}

impl SessionState {
    /// Load the persisted state, or start fresh.
    ///
    /// An empty blob and an undecodable blob both yield a fresh session —
    /// decode failures are recovered here and never propagate. Otherwise
    /// the load transform applies: the decoded record's `queries_so_far`
    /// become the replay queue, its `lines_so_far` becomes the skip
    /// counter, `queries_so_far` restarts as a copy of the replay queue,
    /// and `lines_so_far` restarts at the skip counter, so snapshots taken
    /// during replay still describe the whole command.
    pub fn load_or_default<S: Storage>(storage: &mut S) -> Result<Self, StorageError> {
        let blob = storage.read()?;
        if blob.is_empty() {
            return Ok(Self::default());
        }
        let decoded = match decode_state(&blob) {
            Ok(state) => state,
            Err(_) => return Ok(Self::default()),
        };
        Ok(Self {
            queries_so_far: decoded.queries_so_far.clone(),
            loaded_queries: decoded.queries_so_far,
            lines_to_skip: decoded.lines_so_far,
            lines_so_far: decoded.lines_so_far,
            last_random: decoded.last_random,
        })
    }

    /// Encode `self` and overwrite the blob.
    pub fn save<S: Storage>(&self, storage: &mut S) -> Result<(), StorageError> {
        storage.write(&encode_state(self))
    }

    /// End-of-command reset: empty queues, zero counters, keep the seed,
    /// save.
    ///
    /// Closes the replay window, so a crash inside the next command replays
    /// only that command's reads and writes.
    pub fn clear_command<S: Storage>(&mut self, storage: &mut S) -> Result<(), StorageError> {
        self.loaded_queries.clear();
        self.queries_so_far.clear();
        self.lines_to_skip = 0;
        self.lines_so_far = 0;
        self.save(storage)
    }

    /// Replace the blob with the fresh-session marker (zero bytes).
    pub fn clear_storage<S: Storage>(storage: &mut S) -> Result<(), StorageError> {
        storage.write(&[])
    }
}
