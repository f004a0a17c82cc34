//! # stumpgen
//!
//! Turns a boosted decision-stump model, stored as XML, into C++ source for
//! the equivalent classifier. The generated code has the model's constants
//! baked in and does not read the model file at run time.
//!
//! ## Input
//!
//! ```xml
//! <model>
//!   <weakhyp>
//!     <alpha>0.42</alpha>
//!     <threshold>1.25</threshold>
//!     <column>AspectRatio</column>
//!     <class id="65">0.8</class>
//!     <class id="66">-0.8</class>
//!   </weakhyp>
//!   <!-- one weakhyp per boosting round -->
//! </model>
//! ```
//!
//! The `id` attributes of the first `weakhyp` form the class registry. Every
//! `weakhyp` must carry one vote per registered class, in the same order.
//!
//! ## Output
//!
//! - `classifier.h`: declares `int classify(objs_t &, size_t);`
//! - `classifier.cc`: the `classes` table and a `classify` body that sums
//!   `alpha * (threshold < value ? vote : -(vote))` per class and returns the
//!   class with the highest total (earliest class wins a tie).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stumpgen::{Generator, GeneratorConfig};
//!
//! # fn main() -> stumpgen::Result<()> {
//! stumpgen::init();
//! let report = Generator::new(GeneratorConfig::default()).run("model.xml")?;
//! println!("wrote {}", report.source_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error types, constants, the feature descriptor set
//! - [`model`]: class registry and weak hypotheses
//! - [`io`]: XML model reader and artifact writer
//! - [`codegen`]: header and source emitters
//! - [`config`]: output names and locations
//! - [`generator`]: one end-to-end run

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Parsed model representation
pub mod model;

// Model reading and artifact writing
pub mod io;

// Code emission
pub mod codegen;

// End-to-end driver
pub mod generator;

pub use crate::core::{
    constants::*,
    error::{Result, StructuralError, StumpgenError},
    types::*,
};

pub use crate::config::{ConfigSource, GeneratorConfig, GeneratorConfigBuilder};
pub use crate::model::{ClassSet, FeatureRef, StumpModel, WeakHypothesis};
pub use crate::io::ModelReader;
pub use crate::codegen::{emit_header, emit_source, render_header, render_source, ArtifactKind};
pub use crate::generator::{GenerationReport, Generator, RenderedArtifacts};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging. `RUST_LOG` controls verbosity; warnings are shown by
/// default. Calling this more than once is harmless.
pub fn init() {
    crate::core::initialize_core()
}

/// Check if [`init`] has run.
pub fn is_initialized() -> bool {
    crate::core::is_core_initialized()
}
