//! Error types for the interpreter.

use std::fmt;

use reckon_session::SessionError;

/// Fatal interpreter errors.
///
/// Unknown commands are not errors — they produce a user-visible message
/// and the loop continues. Everything here tears the session down and
/// leaves the current snapshot in storage, so a restart resumes from it.
/// For a malformed number that means the restart replays the same bad
/// input and fails again; the stored input has to be cleared out of band.
#[derive(Debug)]
pub enum InterpError {
    /// A line that had to be an integer was not one.
    MalformedNumber {
        /// The offending input line, as read.
        input: String,
    },
    /// The console or the storage adapter failed.
    Session(SessionError),
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedNumber { input } => write!(f, "not an integer: {input:?}"),
            Self::Session(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InterpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedNumber { .. } => None,
            Self::Session(e) => Some(e),
        }
    }
}

impl From<SessionError> for InterpError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}
