//! Reckon: a crash-resilient command-line calculator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Reckon sub-crates. For most users, adding `reckon` as a single
//! dependency is sufficient.
//!
//! The calculator persists its progress after every observable interaction.
//! If the process is killed mid-command, the next start replays the logged
//! answers and absorbs the already-printed output lines, so the user's view
//! of the session is a single uninterrupted transcript.
//!
//! # Quick start
//!
//! ```rust
//! use reckon::prelude::*;
//! use reckon_test_utils::{MemoryStorage, ScriptedConsole};
//!
//! // One storage blob shared across "process restarts".
//! let storage = MemoryStorage::new();
//!
//! // First run: the user types `add` and `2`, then the process dies.
//! let console = ScriptedConsole::new(["add", "2"]);
//! let mut interp = Interpreter::new(console.clone(), storage.clone()).unwrap();
//! assert!(interp.run().is_err());
//! assert!(console.outputs().is_empty());
//!
//! // Second run: the logged answers replay; the user only types `3`.
//! let console = ScriptedConsole::new(["3", "exit"]);
//! let mut interp = Interpreter::new(console.clone(), storage.clone()).unwrap();
//! interp.run().unwrap();
//! assert_eq!(console.outputs(), ["5"]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `reckon-core` | `Console`/`Storage` capability traits and their errors |
//! | [`session`] | `reckon-session` | `SessionState`, the blob codec, `ReplayConsole` |
//! | [`interp`] | `reckon-interp` | `Interpreter`, the command set, `MinStd` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Capability traits and error types (`reckon-core`).
///
/// Contains the [`types::Console`] and [`types::Storage`] traits the whole
/// workspace composes over.
pub use reckon_core as types;

/// Durable session state, blob codec, and the replay-mediated console
/// (`reckon-session`).
pub use reckon_session as session;

/// Interpreter loop, command set, and the pseudo-random generator
/// (`reckon-interp`).
pub use reckon_interp as interp;

/// Common imports for typical Reckon usage.
///
/// ```rust
/// use reckon::prelude::*;
/// ```
pub mod prelude {
    // Capability traits and errors
    pub use reckon_core::{Console, ConsoleError, Storage, StorageError};

    // Session state and replay
    pub use reckon_session::{CodecError, ReplayConsole, SessionError, SessionState};

    // Interpreter
    pub use reckon_interp::{InterpError, Interpreter, MinStd, DEFAULT_SEED};
}
