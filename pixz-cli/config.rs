//! Run configuration and validation of parsed command-line arguments.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use pixz_core::{EngineSettings, Threading, PRESET_DEFAULT, PRESET_EXTREME};

use crate::error::UsageError;

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Compression level used when no `-0`..`-9` flag is given
pub const DEFAULT_LEVEL: u32 = PRESET_DEFAULT;

/// The operation performed by a run. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationMode {
    /// Compress input data
    #[default]
    Write,
    /// Decompress a whole archive
    Read,
    /// Extract selected tar members
    Extract,
    /// List archive contents
    List,
}

/// Fully resolved configuration of a single run.
///
/// Built once from the command line and never modified afterwards. Level,
/// thread bound, queue depth and block fraction are forwarded to the engine
/// without interpretation.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Compression level (0-9)
    pub level: u32,
    /// Use the extreme variant of the level
    pub extreme: bool,
    /// Treat the payload as a tar archive
    pub tar: bool,
    /// Keep input files after processing
    pub keep: bool,
    /// Upper bound on CPU-intensive threads (`0` means automatic)
    pub threads: Option<u32>,
    /// Depth of the engine's block queue
    pub queue_depth: Option<NonZeroUsize>,
    /// Block size as a fraction of the dictionary size
    pub block_fraction: Option<f64>,
    /// Input path given with `-i`; `None` reads standard input
    pub input: Option<PathBuf>,
    /// Output path given with `-o`; `None` writes standard output
    pub output: Option<PathBuf>,
    /// Tar members to extract (extract mode only)
    pub members: Vec<String>,
    /// Diagnostic verbosity (`-v` count)
    pub verbosity: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Write,
            level: DEFAULT_LEVEL,
            extreme: false,
            tar: true,
            keep: false,
            threads: None,
            queue_depth: None,
            block_fraction: None,
            input: None,
            output: None,
            members: Vec::new(),
            verbosity: 0,
        }
    }
}

impl RunConfig {
    /// Raw engine preset: the level, with the extreme bit set when requested.
    pub fn preset(&self) -> u32 {
        if self.extreme {
            self.level | PRESET_EXTREME
        } else {
            self.level
        }
    }

    /// Pipeline tuning to hand to the engine.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::default()
            .with_threads(Threading::from_bound(self.threads))
            .with_queue_depth(self.queue_depth)
            .with_block_fraction(self.block_fraction)
    }
}

/// A validated [`RunConfig`] plus the positional arguments left after flag
/// parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// The run configuration
    pub config: RunConfig,
    /// Positional arguments in command-line order
    pub positionals: Vec<String>,
}

impl Invocation {
    /// Checks the positional arguments against the operation mode.
    ///
    /// In extract mode every positional argument is a member name. Otherwise
    /// they are input then output paths: at most two, or one when listing.
    ///
    /// # Errors
    ///
    /// - [`UsageError::TooManyArguments`] if there are more positionals than the mode accepts
    /// - [`UsageError::MultipleInputs`] if `-i` was given together with a positional input
    /// - [`UsageError::MultipleOutputs`] if `-o` was given together with a positional output
    pub fn new(mut config: RunConfig, positionals: Vec<String>) -> Result<Self, UsageError> {
        if config.mode == OperationMode::Extract {
            config.members.clone_from(&positionals);
            return Ok(Self {
                config,
                positionals,
            });
        }

        if !positionals.is_empty() {
            let limit = if config.mode == OperationMode::List {
                1
            } else {
                2
            };
            if positionals.len() > limit {
                return Err(UsageError::TooManyArguments);
            }
            if config.input.is_some() {
                return Err(UsageError::MultipleInputs);
            }
            if positionals.len() == 2 && config.output.is_some() {
                return Err(UsageError::MultipleOutputs);
            }
        }

        Ok(Self {
            config,
            positionals,
        })
    }
}

/// Parses the `-p` thread bound: a non-negative integer.
///
/// # Errors
///
/// Returns [`UsageError::InvalidThreadBound`] if `s` is not a non-negative integer.
pub fn parse_thread_bound(s: &str) -> Result<u32, UsageError> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| UsageError::InvalidThreadBound)
}

/// Parses the `-q` queue depth: a positive integer.
///
/// # Errors
///
/// Returns [`UsageError::InvalidQueueDepth`] if `s` is not a positive integer.
pub fn parse_queue_depth(s: &str) -> Result<NonZeroUsize, UsageError> {
    s.trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| UsageError::InvalidQueueDepth)
}

/// Parses the `-f` block fraction: a positive, finite real number.
///
/// # Errors
///
/// Returns [`UsageError::InvalidBlockFraction`] for anything else.
pub fn parse_block_fraction(s: &str) -> Result<f64, UsageError> {
    match s.trim().parse::<f64>() {
        Ok(fraction) if fraction.is_finite() && fraction > 0.0 => Ok(fraction),
        _ => Err(UsageError::InvalidBlockFraction),
    }
}
