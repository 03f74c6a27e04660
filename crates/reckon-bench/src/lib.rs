//! Benchmark profiles and utilities for the Reckon workspace.
//!
//! Provides pre-built [`SessionState`] profiles sized like realistic
//! snapshots, so the codec and replay benchmarks measure representative
//! blobs rather than empty records.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use reckon_session::SessionState;

/// Build a mid-command snapshot with `queries` logged inputs of
/// `query_len` characters each.
///
/// The seed is always present, matching a session past its first command.
pub fn session_profile(queries: usize, query_len: usize) -> SessionState {
    let query: String = "7".repeat(query_len);
    let queue: VecDeque<String> = (0..queries).map(|_| query.clone()).collect();
    SessionState {
        loaded_queries: VecDeque::new(),
        queries_so_far: queue,
        lines_to_skip: 0,
        lines_so_far: queries as u32,
        last_random: Some(528_003_995),
    }
}
