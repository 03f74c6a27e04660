//! Command implementations dispatched by the interpreter loop.
//!
//! Every command reads its inputs and writes its outputs through the
//! replay-mediated console, so a mid-command crash resumes exactly where
//! it stopped.

pub mod add;
pub mod help;
pub mod median;
pub mod rand;

use reckon_core::{Console, Storage};
use reckon_session::ReplayConsole;

use crate::error::InterpError;

/// Read one line, trim it, and parse it as a signed decimal integer.
///
/// Parse failure is fatal: the interpreter tears down, and the snapshot
/// holding the bad input stays in storage.
pub(crate) fn read_number<C: Console, S: Storage>(
    io: &mut ReplayConsole<C, S>,
) -> Result<i64, InterpError> {
    let line = io.read_line()?;
    line.trim()
        .parse::<i64>()
        .map_err(|_| InterpError::MalformedNumber { input: line })
}
