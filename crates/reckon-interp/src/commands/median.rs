//! `median` — median of a list of integers.

use reckon_core::{Console, Storage};
use reckon_session::ReplayConsole;

use crate::commands::read_number;
use crate::error::InterpError;

/// Read a count and that many integers, then write the median.
///
/// The output is a single line: `0` for an empty list, the middle element
/// for an odd count, and for an even count the exact half-sum of the two
/// middle elements the way `f64` displays it (`2.5`, `3` — dot separator,
/// no trailing zeros).
pub fn run<C: Console, S: Storage>(io: &mut ReplayConsole<C, S>) -> Result<(), InterpError> {
    let count = read_number(io)?;
    let mut values = Vec::new();
    for _ in 0..count {
        values.push(read_number(io)?);
    }
    values.sort_unstable();

    let text = match values.len() {
        0 => "0".to_string(),
        n if n % 2 == 1 => values[n / 2].to_string(),
        n => {
            let half_sum = (values[n / 2 - 1] + values[n / 2]) as f64 / 2.0;
            half_sum.to_string()
        }
    };
    io.write_line(&text)?;
    Ok(())
}
