//! Parallel, indexed xz compressor
//!
//! Compresses tar archives into indexed `.tpxz` files, and plain data into
//! `.xz`, using every available core.

use std::fmt::Display;
use std::process;

use clap::error::ErrorKind;
use clap::CommandFactory;

mod opts;

use opts::{usage_message, PixzOpts};

use pixz_cli::{logging, run, CliError, USAGE_EXIT_CODE};
use pixz_core::XzEngine;

const PROGRAM_NAME: &str = "pixz";

/// Prints `message` followed by the full help text, then exits with status 2.
fn usage_error(message: impl Display) -> ! {
    eprintln!("{PROGRAM_NAME}: {message}");
    eprintln!();
    eprintln!("{}", PixzOpts::command().render_help());
    process::exit(USAGE_EXIT_CODE);
}

fn report(err: &CliError) -> ! {
    if err.as_usage().is_some() {
        usage_error(err);
    }
    eprintln!("{PROGRAM_NAME}: {err}");
    process::exit(err.exit_code());
}

fn parse_opts() -> PixzOpts {
    match PixzOpts::try_parse_args() {
        Ok(opts) => opts,
        // Help and version go to stderr, like every other message pixz prints.
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            eprint!("{}", err.render());
            process::exit(0);
        }
        Err(err) => usage_error(usage_message(&err)),
    }
}

fn main() {
    let opts = parse_opts();
    logging::init(opts.verbose);

    let invocation = match opts.invocation() {
        Ok(invocation) => invocation,
        Err(err) => report(&err.into()),
    };

    let mut engine = XzEngine::new(invocation.config.engine_settings());
    if let Err(err) = run(&invocation, &mut engine) {
        report(&err);
    }
}
