//! `help` — interactive command reference.
//!
//! The message text is a fixed part of the user-visible contract and is
//! not localized.

use reckon_core::{Console, Storage};
use reckon_session::ReplayConsole;

use crate::error::InterpError;

const HEADER: &str = "Укажите команду, для которой хотите посмотреть помощь";
const COMMANDS: &str = "Доступные команды: add, median, rand";
const EXIT_HINT: &str = "Чтобы выйти из режима помощи введите end";
const ADD_HELP: &str = "Вычисляет сумму двух чисел";
const MEDIAN_HELP: &str = "Вычисляет медиану списка чисел";
const RAND_HELP: &str = "Генерирует список случайных чисел";
const UNKNOWN: &str = "Такой команды нет";

/// Write the help banner, then answer per-command queries until `end`.
pub fn run<C: Console, S: Storage>(io: &mut ReplayConsole<C, S>) -> Result<(), InterpError> {
    io.write_line(HEADER)?;
    io.write_line(COMMANDS)?;
    io.write_line(EXIT_HINT)?;

    loop {
        let line = io.read_line()?;
        match line.trim() {
            "end" => return Ok(()),
            "add" => {
                io.write_line(ADD_HELP)?;
                io.write_line(EXIT_HINT)?;
            }
            "median" => {
                io.write_line(MEDIAN_HELP)?;
                io.write_line(EXIT_HINT)?;
            }
            "rand" => {
                io.write_line(RAND_HELP)?;
                io.write_line(EXIT_HINT)?;
            }
            _ => {
                io.write_line(UNKNOWN)?;
                io.write_line(COMMANDS)?;
                io.write_line(EXIT_HINT)?;
            }
        }
    }
}
