//! Resolution of the CPU-intensive thread bound.

/// Thread bound requested for the compression pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threading {
    /// Pick a thread count that keeps a safety margin for the rest of the system.
    #[default]
    Auto,
    /// Use at most this many worker threads. Zero is treated as `Auto`.
    Exact(u32),
}

impl Threading {
    /// Maps the `-p` value onto a threading mode.
    pub fn from_bound(bound: Option<u32>) -> Self {
        match bound {
            None | Some(0) => Threading::Auto,
            Some(n) => Threading::Exact(n),
        }
    }

    /// Concrete worker count for this configuration, always at least one.
    pub fn resolve(self) -> u32 {
        match self {
            Threading::Auto | Threading::Exact(0) => safe_max_threads(),
            Threading::Exact(requested) => requested,
        }
    }
}

/// Number of worker threads that leaves headroom for the rest of the system.
fn safe_max_threads() -> u32 {
    let available = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);

    let system_reserve = match available {
        1 => 0,
        2..=4 => 1,
        5..=7 => 2,
        _ => 3,
    };

    let safe = available.saturating_sub(system_reserve).max(1);
    u32::try_from(safe).unwrap_or(u32::MAX)
}
