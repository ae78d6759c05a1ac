//! Routing of a run to exactly one engine entry point.

use std::io::Write as _;

use pixz_core::Engine;
use tracing::debug;

use crate::config::{OperationMode, RunConfig};
use crate::error::{Error, Result, UsageError};
use crate::io::Streams;

/// Invokes the engine entry point selected by `config.mode`.
///
/// | Mode    | Entry point                          |
/// |---------|--------------------------------------|
/// | Write   | `write(tar, preset)`                 |
/// | Read    | `read(tar, [])`                      |
/// | Extract | `read(tar, members)`                 |
/// | List    | `list(tar)`                          |
///
/// The streams are flushed and closed before returning.
///
/// # Errors
///
/// Returns [`UsageError::TerminalOutput`] when compressing to a terminal,
/// any engine failure, or [`Error::WriteOutput`] if the final flush fails.
pub fn dispatch<E>(engine: &mut E, config: &RunConfig, streams: Streams) -> Result<()>
where
    E: Engine + ?Sized,
{
    let Streams {
        mut input,
        mut output,
        output_is_terminal,
    } = streams;

    match config.mode {
        OperationMode::Write => {
            if output_is_terminal {
                return Err(UsageError::TerminalOutput.into());
            }
            let preset = config.preset();
            debug!(preset = format_args!("{preset:#x}"), tar = config.tar, "write");
            engine.write(&mut *input, &mut *output, config.tar, preset)?;
        }
        OperationMode::Read => {
            debug!(tar = config.tar, "read");
            engine.read(&mut *input, &mut *output, config.tar, &[])?;
        }
        OperationMode::Extract => {
            debug!(tar = config.tar, members = ?config.members, "extract");
            engine.read(&mut *input, &mut *output, config.tar, &config.members)?;
        }
        OperationMode::List => {
            debug!(tar = config.tar, "list");
            engine.list(&mut *input, &mut *output, config.tar)?;
        }
    }

    output
        .flush()
        .map_err(|source| Error::WriteOutput { source })?;
    Ok(())
}
