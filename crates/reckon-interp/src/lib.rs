//! The Reckon interpreter: command dispatch over the replay-mediated
//! console.
//!
//! Each loop iteration reads one command line, runs the selected command
//! through the same wrapper (so every interaction is persisted as it
//! happens), and then closes the replay window. Killing the process
//! anywhere inside a command leaves a snapshot from which the next run
//! resumes without re-prompting or re-printing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod error;
pub mod interpreter;
pub mod rng;

pub use error::InterpError;
pub use interpreter::Interpreter;
pub use rng::MinStd;

/// Seed applied at bootstrap when a fresh session has no persisted
/// generator state.
pub const DEFAULT_SEED: i64 = 420;
