//! Test doubles for Reckon: a scripted console and an in-memory storage.
//!
//! Both types are cheap shared handles (`Rc<RefCell<..>>` internally):
//! cloning yields another view of the same script, output log, or blob.
//! A test keeps one handle for assertions while the interpreter owns the
//! other, and a "process restart" is simply a second interpreter built over
//! a clone of the same storage.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use reckon_core::{Console, ConsoleError, Storage, StorageError};

/// A console driven by a pre-scripted list of input lines.
///
/// When the script runs dry, `read_line` returns [`ConsoleError::Closed`] —
/// tests use this to simulate the process being killed mid-command. The
/// `reads`/`writes` counters record only the traffic that actually reached
/// this raw console, which is what the no-double-prompt and no-double-emit
/// assertions need.
#[derive(Clone, Default)]
pub struct ScriptedConsole {
    inner: Rc<RefCell<ScriptedInner>>,
}

#[derive(Default)]
struct ScriptedInner {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
    reads: u64,
    writes: u64,
}

impl ScriptedConsole {
    /// Create a console that will answer with `lines`, in order.
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let console = Self::default();
        for line in lines {
            console.feed(line);
        }
        console
    }

    /// Append one more line to the script.
    pub fn feed<T: Into<String>>(&self, line: T) {
        self.inner.borrow_mut().inputs.push_back(line.into());
    }

    /// Every line written to this console so far.
    pub fn outputs(&self) -> Vec<String> {
        self.inner.borrow().outputs.clone()
    }

    /// Number of scripted lines handed out.
    pub fn reads(&self) -> u64 {
        self.inner.borrow().reads
    }

    /// Number of lines written to this console.
    pub fn writes(&self) -> u64 {
        self.inner.borrow().writes
    }

    /// Scripted lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inner.borrow().inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut inner = self.inner.borrow_mut();
        match inner.inputs.pop_front() {
            Some(line) => {
                inner.reads += 1;
                Ok(line)
            }
            None => Err(ConsoleError::Closed),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        let mut inner = self.inner.borrow_mut();
        inner.writes += 1;
        inner.outputs.push(line.to_string());
        Ok(())
    }
}

/// In-memory storage blob shared between handles.
///
/// `write_count` tallies every blob replacement, so tests can check that a
/// snapshot was persisted after each observable interaction and never
/// batched.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    blob: Vec<u8>,
    write_count: u64,
}

impl MemoryStorage {
    /// Create an empty (fresh-session) storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current blob.
    pub fn blob(&self) -> Vec<u8> {
        self.inner.borrow().blob.clone()
    }

    /// True when the blob is the fresh-session marker.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().blob.is_empty()
    }

    /// Number of blob replacements so far.
    pub fn write_count(&self) -> u64 {
        self.inner.borrow().write_count
    }

    /// Overwrite the blob directly (corruption tests).
    pub fn set_blob(&self, bytes: &[u8]) {
        self.inner.borrow_mut().blob = bytes.to_vec();
    }
}

impl Storage for MemoryStorage {
    fn read(&mut self) -> Result<Vec<u8>, StorageError> {
        Ok(self.inner.borrow().blob.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        inner.blob = bytes.to_vec();
        inner.write_count += 1;
        Ok(())
    }
}
