//! The replay-mediated console.
//!
//! Wraps a raw console so that a restarted session transparently completes
//! the command the previous process died inside: logged answers are re-fed
//! without prompting, already-printed lines are swallowed, and every live
//! interaction is persisted before the caller can observe the next one.

use reckon_core::{Console, Storage};

use crate::error::SessionError;
use crate::state::SessionState;

/// Mediates every read and write of the interpreter.
///
/// Owns the raw console, the storage adapter, and the [`SessionState`] for
/// the session's lifetime; between bootstrap and the final clear it is the
/// only writer to the storage blob.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use reckon_session::{ReplayConsole, SessionState};
/// use reckon_test_utils::{MemoryStorage, ScriptedConsole};
///
/// // A snapshot as a crashed run would have left it: one answer logged,
/// // one output line already printed.
/// let state = SessionState {
///     loaded_queries: VecDeque::from(["7".to_string()]),
///     queries_so_far: VecDeque::from(["7".to_string()]),
///     lines_to_skip: 1,
///     lines_so_far: 1,
///     last_random: None,
/// };
///
/// let console = ScriptedConsole::new(["live answer"]);
/// let mut io = ReplayConsole::new(console.clone(), MemoryStorage::new(), state);
///
/// // The logged answer replays without touching the raw console...
/// assert_eq!(io.read_line().unwrap(), "7");
/// assert_eq!(console.reads(), 0);
///
/// // ...the already-printed line is absorbed...
/// io.write_line("printed before the crash").unwrap();
/// assert!(console.outputs().is_empty());
///
/// // ...and from here on the session is live.
/// assert!(!io.replaying());
/// assert_eq!(io.read_line().unwrap(), "live answer");
/// ```
pub struct ReplayConsole<C, S> {
    console: C,
    storage: S,
    state: SessionState,
}

impl<C: Console, S: Storage> ReplayConsole<C, S> {
    /// Wrap `console`, persisting through `storage`, resuming from `state`.
    pub fn new(console: C, storage: S, state: SessionState) -> Self {
        Self {
            console,
            storage,
            state,
        }
    }

    /// Next input line: a replayed answer if any remain, otherwise a live
    /// read that is logged and persisted before it is returned.
    pub fn read_line(&mut self) -> Result<String, SessionError> {
        if let Some(line) = self.state.loaded_queries.pop_front() {
            return Ok(line);
        }
        let line = self.console.read_line()?;
        self.state.queries_so_far.push_back(line.clone());
        self.state.save(&mut self.storage)?;
        Ok(line)
    }

    /// Emit `line`, unless a previous run already printed it, in which case
    /// it is silently absorbed.
    pub fn write_line(&mut self, line: &str) -> Result<(), SessionError> {
        if self.state.lines_to_skip > 0 {
            self.state.lines_to_skip -= 1;
            return Ok(());
        }
        self.console.write_line(line)?;
        self.state.lines_so_far += 1;
        self.state.save(&mut self.storage)?;
        Ok(())
    }

    /// True while the crashed run is still being replayed.
    pub fn replaying(&self) -> bool {
        !self.state.loaded_queries.is_empty() || self.state.lines_to_skip > 0
    }

    /// Close the current replay window (end of command).
    pub fn end_command(&mut self) -> Result<(), SessionError> {
        self.state
            .clear_command(&mut self.storage)
            .map_err(SessionError::from)
    }

    /// Reset the blob to the fresh-session marker.
    pub fn clear_storage(&mut self) -> Result<(), SessionError> {
        SessionState::clear_storage(&mut self.storage).map_err(SessionError::from)
    }

    /// Current state of the pseudo-random stream.
    pub fn last_random(&self) -> Option<i64> {
        self.state.last_random
    }

    /// Update the pseudo-random stream state.
    ///
    /// Not persisted on its own; the caller's end-of-command reset writes
    /// it out.
    pub fn set_last_random(&mut self, x: i64) {
        self.state.last_random = Some(x);
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_state;
    use reckon_test_utils::{MemoryStorage, ScriptedConsole};
    use std::collections::VecDeque;

    fn replaying_state(queries: &[&str], skip: u32) -> SessionState {
        let queue: VecDeque<String> = queries.iter().map(|q| q.to_string()).collect();
        SessionState {
            loaded_queries: queue.clone(),
            queries_so_far: queue,
            lines_to_skip: skip,
            lines_so_far: skip,
            last_random: None,
        }
    }

    #[test]
    fn replayed_answers_drain_in_order_without_console_or_save() {
        let console = ScriptedConsole::default();
        let storage = MemoryStorage::new();
        let mut io = ReplayConsole::new(
            console.clone(),
            storage.clone(),
            replaying_state(&["add", "2"], 0),
        );

        assert_eq!(io.read_line().unwrap(), "add");
        assert_eq!(io.read_line().unwrap(), "2");
        assert_eq!(console.reads(), 0);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn live_read_is_logged_and_saved_before_returning() {
        let console = ScriptedConsole::new(["3"]);
        let storage = MemoryStorage::new();
        let mut io = ReplayConsole::new(console, storage.clone(), SessionState::default());

        assert_eq!(io.read_line().unwrap(), "3");
        assert_eq!(storage.write_count(), 1);

        let persisted = decode_state(&storage.blob()).unwrap();
        assert_eq!(persisted.queries_so_far, VecDeque::from(["3".to_string()]));
    }

    #[test]
    fn skipped_writes_are_absorbed_without_console_or_save() {
        let console = ScriptedConsole::default();
        let storage = MemoryStorage::new();
        let mut io =
            ReplayConsole::new(console.clone(), storage.clone(), replaying_state(&[], 2));

        io.write_line("first").unwrap();
        io.write_line("second").unwrap();
        assert!(console.outputs().is_empty());
        assert_eq!(storage.write_count(), 0);

        // The third write is past the skip window and goes live.
        io.write_line("third").unwrap();
        assert_eq!(console.outputs(), ["third"]);
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn live_write_is_counted_and_saved() {
        let console = ScriptedConsole::default();
        let storage = MemoryStorage::new();
        let mut io = ReplayConsole::new(console, storage.clone(), SessionState::default());

        io.write_line("5").unwrap();

        let persisted = decode_state(&storage.blob()).unwrap();
        assert_eq!(persisted.lines_so_far, 1);
        assert_eq!(persisted.lines_to_skip, 0);
    }

    #[test]
    fn every_live_interaction_saves_exactly_once() {
        let console = ScriptedConsole::new(["a", "b"]);
        let storage = MemoryStorage::new();
        let mut io = ReplayConsole::new(console, storage.clone(), SessionState::default());

        io.read_line().unwrap();
        assert_eq!(storage.write_count(), 1);
        io.write_line("out").unwrap();
        assert_eq!(storage.write_count(), 2);
        io.read_line().unwrap();
        assert_eq!(storage.write_count(), 3);
    }

    #[test]
    fn snapshot_during_replay_describes_whole_command() {
        // A live read that follows replayed answers must persist the full
        // input sequence, replayed part included, so a second crash still
        // resumes correctly.
        let console = ScriptedConsole::new(["3"]);
        let storage = MemoryStorage::new();
        let mut io = ReplayConsole::new(
            console,
            storage.clone(),
            replaying_state(&["add", "2"], 0),
        );

        io.read_line().unwrap();
        io.read_line().unwrap();
        io.read_line().unwrap();

        let persisted = decode_state(&storage.blob()).unwrap();
        let expected: VecDeque<String> =
            ["add", "2", "3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(persisted.queries_so_far, expected);
    }

    #[test]
    fn replaying_flag_tracks_both_queues() {
        let console = ScriptedConsole::default();
        let storage = MemoryStorage::new();

        let mut io = ReplayConsole::new(
            console.clone(),
            storage.clone(),
            replaying_state(&["x"], 1),
        );
        assert!(io.replaying());
        io.read_line().unwrap();
        assert!(io.replaying());
        io.write_line("absorbed").unwrap();
        assert!(!io.replaying());
    }

    #[test]
    fn end_command_closes_the_window_and_persists() {
        let console = ScriptedConsole::new(["42"]);
        let storage = MemoryStorage::new();
        let mut io = ReplayConsole::new(console, storage.clone(), SessionState::default());
        io.set_last_random(420);
        io.read_line().unwrap();

        io.end_command().unwrap();

        let persisted = decode_state(&storage.blob()).unwrap();
        assert_eq!(persisted, SessionState {
            last_random: Some(420),
            ..SessionState::default()
        });
    }

    #[test]
    fn clear_storage_leaves_the_fresh_session_marker() {
        let console = ScriptedConsole::default();
        let storage = MemoryStorage::new();
        let mut io = ReplayConsole::new(console, storage.clone(), SessionState::default());
        io.write_line("something").unwrap();
        assert!(!storage.is_empty());

        io.clear_storage().unwrap();
        assert!(storage.is_empty());
    }
}
