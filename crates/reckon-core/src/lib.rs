//! Core traits and error types for the Reckon calculator.
//!
//! This is the leaf crate with zero internal Reckon dependencies. It defines
//! the two capability interfaces the rest of the workspace composes over —
//! the line-oriented console and the whole-blob storage adapter — together
//! with their error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::{ConsoleError, StorageError};
pub use traits::{Console, Storage};
