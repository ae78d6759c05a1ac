//! Error types for the pixz front end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed or conflicting command-line usage.
///
/// Reported together with the help text; the process exits with status 2.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// More positional arguments than the operation accepts
    #[error("Too many arguments")]
    TooManyArguments,

    /// Input given both through `-i` and positionally
    #[error("Multiple input files specified")]
    MultipleInputs,

    /// Output given both through `-o` and positionally
    #[error("Multiple output files specified")]
    MultipleOutputs,

    /// No suffix rule can derive an output filename
    #[error("{name}: Unknown suffix")]
    UnknownSuffix {
        /// Input filename the rules were applied to
        name: String,
    },

    /// Compressed output would be written to an interactive terminal
    #[error("Refusing to output to a TTY")]
    TerminalOutput,

    /// Bad argument to `-p`
    #[error("Need a non-negative integer argument to -p")]
    InvalidThreadBound,

    /// Bad argument to `-q`
    #[error("Need a positive integer argument to -q")]
    InvalidQueueDepth,

    /// Bad argument to `-f`
    #[error("Need a positive floating-point argument to -f")]
    InvalidBlockFraction,
}

/// Failure to provision or release a file.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open the input file
    #[error("can not open input file: {}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to read the permissions of the input file
    #[error("can not read permissions of input file: {}: {source}", path.display())]
    StatInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create or open the output file
    #[error("can not open output file: {}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to flush buffered output
    #[error("can not write output: {source}")]
    WriteOutput {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to remove the input file after a successful run
    #[error("{}: Cannot remove: {source}", path.display())]
    RemoveInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Exit status for bad usage, including argument parse failures.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Specialized `Result` type for front-end operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Every failure that ends a run, as seen by the top-level handler.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad usage; exit status 2.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// File could not be opened, inspected or created.
    #[error(transparent)]
    Io(#[from] Error),

    /// The processing engine failed.
    #[error(transparent)]
    Engine(#[from] pixz_core::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => USAGE_EXIT_CODE,
            CliError::Io(_) | CliError::Engine(_) => 1,
        }
    }

    /// Returns the usage error, if this is one.
    pub fn as_usage(&self) -> Option<&UsageError> {
        match self {
            CliError::Usage(err) => Some(err),
            CliError::Io(_) | CliError::Engine(_) => None,
        }
    }
}
