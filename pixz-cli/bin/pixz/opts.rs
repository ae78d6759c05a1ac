//! Command line argument parsing for pixz

use std::error::Error as _;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use pixz_cli::{
    parse_block_fraction, parse_queue_depth, parse_thread_bound, Invocation, OperationMode,
    RunConfig, UsageError, DEFAULT_LEVEL,
};

const AFTER_HELP: &str = "\
Examples:
  pixz foo.tar              compress foo.tar into foo.tpxz, removing the original
  pixz -d foo.tpxz          decompress foo.tpxz into foo.tar
  pixz -l foo.tpxz          list the members of foo.tpxz
  pixz -x dir/file < foo.tpxz | tar x
                            extract dir/file from foo.tpxz
  pixz -t < in > out.xz     compress standard input without tar handling";

/// Argument ids of the preset digits; the last one given wins.
const LEVEL_FLAGS: [&str; 10] = [
    "level_0", "level_1", "level_2", "level_3", "level_4", "level_5", "level_6", "level_7",
    "level_8", "level_9",
];

/// Parallel, indexed xz compressor
#[derive(Parser, Debug)]
#[command(
    name = "pixz",
    version,
    about = "Parallel, indexed xz compressor",
    long_about = "pixz compresses and decompresses xz data using all available cores. \
                  Tar archives get an index of their members so that single files can be \
                  listed and extracted without decompressing the whole archive.",
    after_help = AFTER_HELP,
    args_override_self = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct PixzOpts {
    /// Input and output file, or member names with -x
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Decompress
    #[arg(short = 'd', conflicts_with_all = ["extract", "list"])]
    pub decompress: bool,

    /// Extract the named members from a tar archive
    #[arg(short = 'x', conflicts_with_all = ["decompress", "list"])]
    pub extract: bool,

    /// List archive contents
    #[arg(short = 'l', conflicts_with_all = ["decompress", "extract"])]
    pub list: bool,

    /// Read input from PATH instead of standard input
    #[arg(short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write output to PATH instead of standard output
    #[arg(short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Don't treat the input as a tar archive
    #[arg(short = 't')]
    pub no_tar: bool,

    /// Keep the input file after processing
    #[arg(short = 'k')]
    pub keep: bool,

    /// Use extreme compression (slower)
    #[arg(short = 'e')]
    pub extreme: bool,

    /// Accepted for tar compatibility and ignored
    #[arg(short = 'c', hide = true)]
    _compat_c: bool,

    /// Increase diagnostic verbosity (repeatable)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use at most N threads for CPU-intensive work (0 picks automatically)
    #[arg(short = 'p', value_name = "N", value_parser = parse_thread_bound)]
    pub threads: Option<u32>,

    /// Queue at most N blocks per thread
    #[arg(short = 'q', value_name = "N", value_parser = parse_queue_depth)]
    pub queue_depth: Option<NonZeroUsize>,

    /// Use blocks of X times the dictionary size
    #[arg(short = 'f', value_name = "X", value_parser = parse_block_fraction)]
    pub block_fraction: Option<f64>,

    /// Compression level 0 (fastest)
    #[arg(short = '0', overrides_with_all = LEVEL_FLAGS)]
    pub level_0: bool,

    /// Compression level 1
    #[arg(short = '1', overrides_with_all = LEVEL_FLAGS)]
    pub level_1: bool,

    /// Compression level 2
    #[arg(short = '2', overrides_with_all = LEVEL_FLAGS)]
    pub level_2: bool,

    /// Compression level 3
    #[arg(short = '3', overrides_with_all = LEVEL_FLAGS)]
    pub level_3: bool,

    /// Compression level 4
    #[arg(short = '4', overrides_with_all = LEVEL_FLAGS)]
    pub level_4: bool,

    /// Compression level 5
    #[arg(short = '5', overrides_with_all = LEVEL_FLAGS)]
    pub level_5: bool,

    /// Compression level 6 (default)
    #[arg(short = '6', overrides_with_all = LEVEL_FLAGS)]
    pub level_6: bool,

    /// Compression level 7
    #[arg(short = '7', overrides_with_all = LEVEL_FLAGS)]
    pub level_7: bool,

    /// Compression level 8
    #[arg(short = '8', overrides_with_all = LEVEL_FLAGS)]
    pub level_8: bool,

    /// Compression level 9 (best)
    #[arg(short = '9', overrides_with_all = LEVEL_FLAGS)]
    pub level_9: bool,
}

impl PixzOpts {
    /// Parse command line arguments, or return clap's error untouched
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Parser::try_parse()
    }

    /// Determine operation mode based on flags
    pub fn operation_mode(&self) -> OperationMode {
        if self.decompress {
            OperationMode::Read
        } else if self.extract {
            OperationMode::Extract
        } else if self.list {
            OperationMode::List
        } else {
            OperationMode::Write
        }
    }

    /// Get the compression level from the preset flags
    pub fn compression_level(&self) -> Option<u32> {
        [
            self.level_0,
            self.level_1,
            self.level_2,
            self.level_3,
            self.level_4,
            self.level_5,
            self.level_6,
            self.level_7,
            self.level_8,
            self.level_9,
        ]
        .iter()
        .zip(0..)
        .find_map(|(&flag, level)| flag.then_some(level))
    }

    /// Build the run configuration and check the positional arguments
    pub fn invocation(&self) -> Result<Invocation, UsageError> {
        let config = RunConfig {
            mode: self.operation_mode(),
            level: self.compression_level().unwrap_or(DEFAULT_LEVEL),
            extreme: self.extreme,
            tar: !self.no_tar,
            keep: self.keep,
            threads: self.threads,
            queue_depth: self.queue_depth,
            block_fraction: self.block_fraction,
            input: self.input.clone(),
            output: self.output.clone(),
            members: Vec::new(),
            verbosity: self.verbose,
        };
        Invocation::new(config, self.files.clone())
    }
}

/// One-line description of a clap parse failure, for the `pixz: ` report.
///
/// Validation failures of `-p`/`-q`/`-f` yield their own message; anything
/// else yields the first line clap renders, without its `error: ` tag.
pub fn usage_message(err: &clap::Error) -> String {
    if let Some(usage) = err
        .source()
        .and_then(|source| source.downcast_ref::<UsageError>())
    {
        return usage.to_string();
    }

    let rendered = err.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
