//! # pixz-core
//!
//! Processing engine behind the `pixz` command-line front end.
//!
//! The crate exposes three entry points through the [`Engine`] trait: writing
//! (compression), reading (full decompression or extraction of selected tar
//! members) and listing. [`XzEngine`] implements them on top of liblzma's
//! multi-threaded xz encoder and the `tar` crate.

pub mod config;
pub mod engine;
pub mod error;
pub mod threading;

mod archive;
mod pipeline;

pub use config::{EngineSettings, StreamSummary, PRESET_DEFAULT, PRESET_EXTREME};
pub use engine::Engine;
pub use error::{Error, Result};
pub use pipeline::XzEngine;
pub use threading::Threading;
