//! Durable session state and the replay-mediated console for Reckon.
//!
//! The calculator persists its progress after every observable interaction:
//! each live input read and each live output write re-encodes the
//! [`SessionState`] and overwrites the storage blob. On restart,
//! [`SessionState::load_or_default`] reinterprets the crashed run's record as
//! a replay plan, and the [`ReplayConsole`] re-feeds the crashed command's
//! inputs and swallows its already-printed output lines until the live
//! session has caught up.
//!
//! # Blob format
//!
//! ```text
//! [MAGIC "RKON"] [VERSION u8]
//! [loaded queries:  u32 count, count x (u32 len + UTF-8 bytes)]
//! [queries so far:  u32 count, count x (u32 len + UTF-8 bytes)]
//! [lines_to_skip u32] [lines_so_far u32]
//! [seed: u8 presence flag, i64 if flag = 1]
//! ```
//!
//! All integers are little-endian. The format is intentionally simple — no
//! compression, no alignment padding, no serde. The empty blob is not an
//! encoding; it is the fresh-session marker, recognized by
//! [`SessionState::load_or_default`] before the codec is consulted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod replay;
pub mod state;

pub use error::{CodecError, SessionError};
pub use replay::ReplayConsole;
pub use state::SessionState;

/// Magic bytes at the start of every session blob.
pub const MAGIC: [u8; 4] = *b"RKON";

/// Current blob format version.
pub const FORMAT_VERSION: u8 = 1;
