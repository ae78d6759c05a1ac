//! Error types and result handling for engine operations.

use std::fmt;

pub use xz2::stream::Error as BackendError;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the write, read and list entry points.
#[derive(Debug)]
pub enum Error {
    /// Failure reported by liblzma while setting up a stream.
    Backend(BackendError),

    /// I/O failure while reading input or writing output.
    Io(std::io::Error),

    /// The raw preset does not name a known compression level.
    InvalidPreset {
        /// Raw preset value including modifier bits
        preset: u32,
    },

    /// Invalid tuning value supplied by the caller.
    InvalidOption(String),

    /// The operation only makes sense on a tar payload.
    RequiresTar {
        /// Short name of the rejected operation
        operation: &'static str,
    },

    /// Requested members were not present in the archive.
    MembersNotFound {
        /// Member names that matched no archive entry
        members: Vec<String>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Backend(err) => write!(f, "liblzma backend error: {err}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::InvalidPreset { preset } => write!(f, "unsupported preset: {preset:#x}"),
            Error::InvalidOption(message) => write!(f, "invalid option: {message}"),
            Error::RequiresTar { operation } => {
                write!(f, "{operation} requires tar mode (drop -t)")
            }
            Error::MembersNotFound { members } => {
                write!(f, "not found in archive: {}", members.join(", "))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Backend(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        Error::Backend(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
