//! Reckon — a crash-resilient command-line calculator.
//!
//! Session progress is persisted after every observable interaction. If the
//! process is killed, the next start resumes the in-flight command without
//! re-prompting for answered inputs or re-printing emitted lines. A clean
//! `exit` clears the snapshot file.

mod console;
mod storage;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use reckon_interp::Interpreter;

use crate::console::StdConsole;
use crate::storage::FileStorage;

/// Crash-resilient command-line calculator.
///
/// Commands: add, median, rand, help, exit.
#[derive(Debug, Parser)]
#[command(name = "reckon", version)]
struct Args {
    /// Path of the session snapshot file.
    #[arg(long, default_value = "reckon-session.bin")]
    state_path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let storage = FileStorage::new(args.state_path);
    let mut interp = match Interpreter::new(StdConsole::new(), storage) {
        Ok(interp) => interp,
        Err(e) => {
            eprintln!("reckon: {e}");
            return ExitCode::FAILURE;
        }
    };

    match interp.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("reckon: {e}");
            ExitCode::FAILURE
        }
    }
}
