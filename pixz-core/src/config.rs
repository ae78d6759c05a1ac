//! Engine tuning values and shared result types.

use std::num::NonZeroUsize;

use crate::error::{Error, Result};
use crate::threading::Threading;

/// Compression level used when the caller does not pick one.
pub const PRESET_DEFAULT: u32 = 6;

/// Flag bit requesting the slower "extreme" variant of a preset level.
pub const PRESET_EXTREME: u32 = 1 << 31;

/// Bits of a raw preset that carry the numeric level.
pub const PRESET_LEVEL_MASK: u32 = 0x1F;

/// Highest numeric level liblzma knows about.
pub const PRESET_LEVEL_MAX: u32 = 9;

/// Block fraction applied when none is configured.
pub const DEFAULT_BLOCK_FRACTION: f64 = 2.0;

/// Number of blocks allowed in flight when no queue depth is configured.
pub const DEFAULT_QUEUE_DEPTH: usize = 2;

/// Dictionary sizes of the xz presets, indexed by level.
const PRESET_DICTIONARY_SIZES: [u64; 10] = [
    256 << 10,
    1 << 20,
    2 << 20,
    4 << 20,
    4 << 20,
    8 << 20,
    8 << 20,
    16 << 20,
    32 << 20,
    64 << 20,
];

/// Pipeline tuning forwarded from the command line.
///
/// None of these values change the meaning of an operation; they only shape
/// how the engine schedules its work.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineSettings {
    /// Upper bound on CPU-intensive worker threads.
    pub threads: Threading,
    /// Maximum number of blocks queued between pipeline stages.
    pub queue_depth: Option<NonZeroUsize>,
    /// Block size expressed as a multiple of the preset's dictionary size.
    pub block_fraction: Option<f64>,
}

impl EngineSettings {
    /// Sets the thread bound.
    #[must_use]
    pub fn with_threads(mut self, threads: Threading) -> Self {
        self.threads = threads;
        self
    }

    /// Sets the queue depth.
    #[must_use]
    pub fn with_queue_depth(mut self, depth: Option<NonZeroUsize>) -> Self {
        self.queue_depth = depth;
        self
    }

    /// Sets the block fraction.
    #[must_use]
    pub fn with_block_fraction(mut self, fraction: Option<f64>) -> Self {
        self.block_fraction = fraction;
        self
    }

    /// Effective queue depth.
    pub fn queue_depth(&self) -> usize {
        self.queue_depth.map_or(DEFAULT_QUEUE_DEPTH, NonZeroUsize::get)
    }

    /// Computes the uncompressed block size for a raw preset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPreset`] when the preset level is out of range and
    /// [`Error::InvalidOption`] when the block fraction is not a positive finite
    /// number.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn block_size(&self, preset: u32) -> Result<u64> {
        let level = preset_level(preset)?;
        let fraction = self.block_fraction.unwrap_or(DEFAULT_BLOCK_FRACTION);
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(Error::InvalidOption(format!(
                "block fraction must be positive, got {fraction}"
            )));
        }

        let dictionary = PRESET_DICTIONARY_SIZES[level as usize] as f64;
        Ok(((dictionary * fraction) as u64).max(1))
    }
}

/// Extracts the numeric level from a raw preset, rejecting unknown levels.
///
/// # Errors
///
/// Returns [`Error::InvalidPreset`] if the level exceeds [`PRESET_LEVEL_MAX`] or
/// the preset carries bits other than the level and [`PRESET_EXTREME`].
pub fn preset_level(preset: u32) -> Result<u32> {
    let level = preset & PRESET_LEVEL_MASK;
    let unknown = preset & !(PRESET_LEVEL_MASK | PRESET_EXTREME);
    if level > PRESET_LEVEL_MAX || unknown != 0 {
        return Err(Error::InvalidPreset { preset });
    }
    Ok(level)
}

/// Byte counts of a completed engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamSummary {
    /// Total number of bytes read from the input source.
    pub bytes_read: u64,

    /// Total number of bytes written to the output destination.
    pub bytes_written: u64,
}

impl StreamSummary {
    pub(crate) const fn new(bytes_read: u64, bytes_written: u64) -> Self {
        Self {
            bytes_read,
            bytes_written,
        }
    }
}
