//! The entry points the front end dispatches to.

use std::io::{Read, Write};

use crate::config::StreamSummary;
use crate::error::Result;

/// Processing engine invoked once per run.
///
/// Each method consumes the whole input stream. Implementations must not
/// close or replace the streams they are handed.
pub trait Engine {
    /// Compresses `input` into `output`.
    ///
    /// `preset` is a raw preset: the level in the low bits, optionally combined
    /// with [`PRESET_EXTREME`](crate::PRESET_EXTREME).
    ///
    /// # Errors
    ///
    /// Returns an error if the preset is invalid, the encoder cannot be set up,
    /// or reading/writing fails.
    fn write(
        &mut self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar: bool,
        preset: u32,
    ) -> Result<StreamSummary>;

    /// Decompresses `input` into `output`.
    ///
    /// An empty `members` list decompresses the whole archive. Otherwise only the
    /// named tar members are emitted, as a tar stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is corrupt, members are requested without
    /// tar mode or cannot be found, or reading/writing fails.
    fn read(
        &mut self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar: bool,
        members: &[String],
    ) -> Result<StreamSummary>;

    /// Writes a listing of the archive in `input` to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is corrupt or reading/writing fails.
    fn list(&mut self, input: &mut dyn Read, output: &mut dyn Write, tar: bool) -> Result<()>;
}
