//! Reckon crash/resume — recording a session, killing it, and resuming.
//!
//! Demonstrates:
//!   1. Driving the interpreter over scripted console and in-memory storage
//!   2. Killing the session in the middle of a command
//!   3. Resuming from the persisted snapshot without re-prompting
//!
//! Run with:
//!   cargo run --example crash_resume

use reckon_interp::Interpreter;
use reckon_session::codec::decode_state;
use reckon_test_utils::{MemoryStorage, ScriptedConsole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Reckon Crash/Resume Demo ===\n");

    let storage = MemoryStorage::new();

    // ----------------------------------------------------------------
    // Phase 1: the user types `add` and `2`, then the process dies.
    // ----------------------------------------------------------------

    println!("--- Phase 1: Kill mid-command ---\n");

    let console = ScriptedConsole::new(["add", "2"]);
    let mut interp = Interpreter::new(console.clone(), storage.clone())?;
    let err = interp.run().expect_err("the dry script kills the session");
    println!("session died: {err}");

    let snapshot = decode_state(&storage.blob())?;
    println!(
        "snapshot: {} logged inputs, {} emitted lines, seed {:?}\n",
        snapshot.queries_so_far.len(),
        snapshot.lines_so_far,
        snapshot.last_random,
    );

    // ----------------------------------------------------------------
    // Phase 2: restart. The logged answers replay internally; the user
    // only types the missing `3`.
    // ----------------------------------------------------------------

    println!("--- Phase 2: Resume ---\n");

    let console = ScriptedConsole::new(["3", "exit"]);
    let mut interp = Interpreter::new(console.clone(), storage.clone())?;
    interp.run()?;

    for line in console.outputs() {
        println!("> {line}");
    }
    println!(
        "\nraw console prompted {} time(s) after the restart",
        console.reads()
    );
    println!(
        "storage after exit: {} bytes (fresh-session marker)",
        storage.blob().len()
    );

    println!("\nDone.");
    Ok(())
}
