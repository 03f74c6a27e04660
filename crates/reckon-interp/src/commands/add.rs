//! `add` — sum of two integers.

use reckon_core::{Console, Storage};
use reckon_session::ReplayConsole;

use crate::commands::read_number;
use crate::error::InterpError;

/// Read two integers and write their sum as a decimal integer.
pub fn run<C: Console, S: Storage>(io: &mut ReplayConsole<C, S>) -> Result<(), InterpError> {
    let a = read_number(io)?;
    let b = read_number(io)?;
    io.write_line(&(a + b).to_string())?;
    Ok(())
}
