//! The top-level dispatch loop.

use reckon_core::{Console, Storage};
use reckon_session::{ReplayConsole, SessionError, SessionState};

use crate::commands;
use crate::error::InterpError;
use crate::DEFAULT_SEED;

const UNKNOWN_COMMAND: &str = "Такой команды нет, используйте help для списка команд";

/// The interactive calculator session.
///
/// Construction loads (or freshly creates) the persisted session and wraps
/// the console; [`run`](Self::run) then dispatches commands until `exit` or
/// a fatal error. After every completed command the replay window is
/// closed, so a later crash replays only the command it happened inside.
///
/// # Examples
///
/// ```
/// use reckon_interp::Interpreter;
/// use reckon_test_utils::{MemoryStorage, ScriptedConsole};
///
/// let console = ScriptedConsole::new(["add", "2", "3", "exit"]);
/// let storage = MemoryStorage::new();
///
/// let mut interp = Interpreter::new(console.clone(), storage.clone()).unwrap();
/// interp.run().unwrap();
///
/// assert_eq!(console.outputs(), ["5"]);
/// assert!(storage.is_empty());
/// ```
pub struct Interpreter<C: Console, S: Storage> {
    io: ReplayConsole<C, S>,
}

impl<C: Console, S: Storage> Interpreter<C, S> {
    /// Load the persisted session (or start fresh) and wrap the console.
    pub fn new(console: C, mut storage: S) -> Result<Self, InterpError> {
        let mut state =
            SessionState::load_or_default(&mut storage).map_err(SessionError::from)?;
        if state.last_random.is_none() {
            state.last_random = Some(DEFAULT_SEED);
        }
        Ok(Self {
            io: ReplayConsole::new(console, storage, state),
        })
    }

    /// Run the session until `exit` or a fatal error.
    ///
    /// On `exit` the blob is reset to the fresh-session marker. On any
    /// error the current snapshot stays in storage, so the next run
    /// resumes from it.
    pub fn run(&mut self) -> Result<(), InterpError> {
        loop {
            let line = self.io.read_line()?;
            match line.trim() {
                "exit" => {
                    self.io.clear_storage()?;
                    return Ok(());
                }
                "add" => commands::add::run(&mut self.io)?,
                "median" => commands::median::run(&mut self.io)?,
                "help" => commands::help::run(&mut self.io)?,
                "rand" => {
                    let seed = self.io.last_random().unwrap_or(DEFAULT_SEED);
                    let next = commands::rand::run(&mut self.io, seed)?;
                    self.io.set_last_random(next);
                }
                _ => self.io.write_line(UNKNOWN_COMMAND)?,
            }
            self.io.end_command()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reckon_test_utils::{MemoryStorage, ScriptedConsole};

    #[test]
    fn unknown_command_prints_hint_and_continues() {
        let console = ScriptedConsole::new(["foo", "add", "1", "1", "exit"]);
        let mut interp = Interpreter::new(console.clone(), MemoryStorage::new()).unwrap();
        interp.run().unwrap();
        assert_eq!(console.outputs(), [UNKNOWN_COMMAND, "2"]);
    }

    #[test]
    fn command_names_are_case_sensitive() {
        let console = ScriptedConsole::new(["ADD", "exit"]);
        let mut interp = Interpreter::new(console.clone(), MemoryStorage::new()).unwrap();
        interp.run().unwrap();
        assert_eq!(console.outputs(), [UNKNOWN_COMMAND]);
    }

    #[test]
    fn command_line_is_trimmed() {
        let console = ScriptedConsole::new(["  add  ", "2", "3", "exit"]);
        let mut interp = Interpreter::new(console.clone(), MemoryStorage::new()).unwrap();
        interp.run().unwrap();
        assert_eq!(console.outputs(), ["5"]);
    }

    #[test]
    fn exit_leaves_empty_storage() {
        let console = ScriptedConsole::new(["rand", "1", "exit"]);
        let storage = MemoryStorage::new();
        let mut interp = Interpreter::new(console, storage.clone()).unwrap();
        interp.run().unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn fresh_session_seeds_the_generator_with_420() {
        let console = ScriptedConsole::new(["rand", "1", "exit"]);
        let mut interp = Interpreter::new(console.clone(), MemoryStorage::new()).unwrap();
        interp.run().unwrap();
        assert_eq!(console.outputs(), ["420"]);
    }

    #[test]
    fn generator_state_carries_across_commands() {
        let console = ScriptedConsole::new(["rand", "3", "rand", "1", "exit"]);
        let mut interp = Interpreter::new(console.clone(), MemoryStorage::new()).unwrap();
        interp.run().unwrap();
        assert_eq!(
            console.outputs(),
            ["420", "7058940", "528003995", "760714561"]
        );
    }
}
