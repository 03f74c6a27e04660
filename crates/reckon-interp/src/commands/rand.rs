//! `rand` — a run of the minimal-standard pseudo-random stream.

use reckon_core::{Console, Storage};
use reckon_session::ReplayConsole;

use crate::commands::read_number;
use crate::error::InterpError;
use crate::rng::MinStd;

/// Read a count, write that many values of the stream starting at `seed`,
/// and return the state the next `rand` resumes from.
///
/// A count of zero (or less) writes nothing and returns `seed` unchanged.
pub fn run<C: Console, S: Storage>(
    io: &mut ReplayConsole<C, S>,
    seed: i64,
) -> Result<i64, InterpError> {
    let count = read_number(io)?;
    let mut rng = MinStd::new(seed);
    for _ in 0..count {
        io.write_line(&rng.next_value().to_string())?;
    }
    Ok(rng.state())
}
