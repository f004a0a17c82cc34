//! Core infrastructure module for stumpgen.
//!
//! - [`types`]: the feature descriptor set
//! - [`constants`]: document tag names and output defaults
//! - [`error`]: error types shared by the reader, emitter and generator

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{Result, StructuralError, StumpgenError};
pub use types::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Set up logging. Safe to call more than once.
pub(crate) fn initialize_core() {
    INIT.call_once(|| {
        // Try to initialize env_logger, ignore if already initialized
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        )
        .try_init();
        log::debug!("stumpgen {} initialized", env!("CARGO_PKG_VERSION"));
    });
}

/// Check if [`initialize_core`] has run.
pub(crate) fn is_core_initialized() -> bool {
    INIT.is_completed()
}
