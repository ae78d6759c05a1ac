//! Orchestration of a single run: resolve, open, dispatch, clean up.

use std::fs;

use pixz_core::Engine;
use tracing::{info, warn};

use crate::config::{Invocation, RunConfig};
use crate::dispatch::dispatch;
use crate::error::{Error, Result};
use crate::io::Streams;
use crate::resolve::ResolvedPaths;

/// Removes the input file after a successful run when its output name was
/// derived and `-k` was not given.
///
/// Removal is best-effort: a failure is logged and otherwise ignored.
/// Returns whether the file was removed.
pub fn cleanup_input_file(paths: &ResolvedPaths, config: &RunConfig) -> bool {
    if !paths.auto_remove_input || config.keep {
        return false;
    }
    let Some(input) = paths.input.as_deref() else {
        return false;
    };

    match fs::remove_file(input) {
        Ok(()) => {
            info!(path = %input.display(), "removed input file");
            true
        }
        Err(source) => {
            let err = Error::RemoveInput {
                path: input.to_path_buf(),
                source,
            };
            warn!("{err}");
            false
        }
    }
}

/// Runs `invocation` against `engine`.
///
/// 1. Resolves the input and output paths
/// 2. Opens both streams
/// 3. Dispatches to the engine entry point for the mode
/// 4. Removes the input file if the run calls for it
///
/// # Errors
///
/// Returns the first usage, I/O or engine error encountered. Cleanup never
/// fails the run.
pub fn run<E>(invocation: &Invocation, engine: &mut E) -> Result<()>
where
    E: Engine + ?Sized,
{
    let config = &invocation.config;
    let paths = ResolvedPaths::resolve(invocation)?;
    info!(
        mode = ?config.mode,
        input = ?paths.input,
        output = ?paths.output,
        "starting"
    );

    let streams = Streams::open(&paths)?;
    dispatch(engine, config, streams)?;

    cleanup_input_file(&paths, config);
    Ok(())
}
