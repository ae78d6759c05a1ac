//! liblzma-backed implementation of the engine entry points.

use std::io::{self, Read, Write};

use tracing::{debug, info};
use xz2::read::XzDecoder;
use xz2::stream::{Check, MtStreamBuilder};
use xz2::write::XzEncoder;

use crate::archive::{extract_members, list_members};
use crate::config::{preset_level, EngineSettings, StreamSummary, PRESET_EXTREME};
use crate::engine::Engine;
use crate::error::{Error, Result};

/// Writer adapter that counts the bytes passed through it.
struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Engine producing standard `.xz` streams with liblzma's multi-threaded encoder.
///
/// Tar payloads are handled on the decompressed side: listing walks the tar
/// headers and member extraction re-emits the selected entries as a new tar
/// stream.
#[derive(Debug, Clone, Default)]
pub struct XzEngine {
    settings: EngineSettings,
}

impl XzEngine {
    /// Creates an engine with the given pipeline tuning.
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }
}

impl Engine for XzEngine {
    fn write(
        &mut self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar: bool,
        preset: u32,
    ) -> Result<StreamSummary> {
        let level = preset_level(preset)?;
        let threads = self.settings.threads.resolve();
        let block_size = self.settings.block_size(preset)?;
        debug!(
            level,
            extreme = preset & PRESET_EXTREME != 0,
            threads,
            block_size,
            queue_depth = self.settings.queue_depth(),
            tar,
            "starting compression"
        );

        let stream = MtStreamBuilder::new()
            .threads(threads)
            .block_size(block_size)
            .preset(preset)
            .check(Check::Crc64)
            .encoder()?;

        let mut encoder = XzEncoder::new_stream(&mut *output, stream);
        let bytes_read = io::copy(input, &mut encoder)?;
        encoder.try_finish()?;
        let bytes_written = encoder.total_out();
        encoder.finish()?;
        output.flush()?;

        info!(bytes_read, bytes_written, "compression finished");
        Ok(StreamSummary::new(bytes_read, bytes_written))
    }

    fn read(
        &mut self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar: bool,
        members: &[String],
    ) -> Result<StreamSummary> {
        if !members.is_empty() && !tar {
            return Err(Error::RequiresTar {
                operation: "member extraction",
            });
        }

        let mut decoder = XzDecoder::new_multi_decoder(&mut *input);
        let mut output = CountingWriter::new(&mut *output);

        if members.is_empty() {
            io::copy(&mut decoder, &mut output)?;
        } else {
            debug!(count = members.len(), "extracting selected members");
            extract_members(&mut decoder, &mut output, members)?;
            // Consume the rest of the stream so the integrity check is verified.
            io::copy(&mut decoder, &mut io::sink())?;
        }
        output.flush()?;

        let summary = StreamSummary::new(decoder.total_in(), output.written);
        info!(
            bytes_read = summary.bytes_read,
            bytes_written = summary.bytes_written,
            "decompression finished"
        );
        Ok(summary)
    }

    fn list(&mut self, input: &mut dyn Read, output: &mut dyn Write, tar: bool) -> Result<()> {
        let mut decoder = XzDecoder::new_multi_decoder(&mut *input);

        if tar {
            let count = list_members(&mut decoder, output)?;
            io::copy(&mut decoder, &mut io::sink())?;
            debug!(count, "listed members");
        } else {
            let uncompressed = io::copy(&mut decoder, &mut io::sink())?;
            writeln!(output, "{} {}", decoder.total_in(), uncompressed)?;
        }

        output.flush()?;
        Ok(())
    }
}
