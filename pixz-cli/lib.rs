//! Command-line front end for the `pixz` parallel, indexing xz compressor.
//!
//! A run flows through four stages, each in its own module:
//!
//! - [`config`]: the immutable [`RunConfig`] and positional-argument checks
//! - [`resolve`]: output filename derivation from the ordered suffix table
//! - [`io`]: opening the input and output streams
//! - [`dispatch`]: handing the streams to one [`pixz_core::Engine`] entry point
//!
//! [`process::run`] ties them together and removes the input file afterwards
//! when the output name was derived.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod io;
pub mod logging;
pub mod process;
pub mod resolve;

pub use config::{
    parse_block_fraction, parse_queue_depth, parse_thread_bound, Invocation, OperationMode,
    RunConfig, DEFAULT_BUFFER_SIZE, DEFAULT_LEVEL,
};
pub use dispatch::dispatch;
pub use error::{CliError, Error, Result, UsageError, USAGE_EXIT_CODE};
pub use io::Streams;
pub use process::{cleanup_input_file, run};
pub use resolve::{auto_output, ResolvedPaths, SUFFIX_RULES};
