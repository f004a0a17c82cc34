//! Code emitter for stumpgen.
//!
//! Two artifacts are produced from a parsed [`StumpModel`]: the interface
//! declaration ([`header`]) and the classifier implementation ([`source`]).
//! Both render to a `String` first; the `emit_*` functions write that text to
//! any `std::io::Write` sink, so the output can be tested without touching
//! the filesystem.

pub mod builder;
pub mod header;
pub mod source;

pub use builder::SourceBuilder;
pub use header::render_header;
pub use source::{render_source, value_identifier, vote_statement};

use crate::config::GeneratorConfig;
use crate::core::error::Result;
use crate::model::StumpModel;
use std::io::Write;

/// Which generated file an emitter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `classify` declaration
    Header,
    /// `classes` table and `classify` body
    Source,
}

impl ArtifactKind {
    /// Kinds in write order
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Header, ArtifactKind::Source];
}

/// A generated text artifact.
pub trait ArtifactEmitter {
    /// Artifact kind
    fn kind(&self) -> ArtifactKind;

    /// Render the artifact for `model`.
    fn render(&self, model: &StumpModel) -> String;

    /// Render and write the artifact to `sink`.
    fn emit(&self, model: &StumpModel, sink: &mut dyn Write) -> Result<()> {
        sink.write_all(self.render(model).as_bytes())?;
        Ok(())
    }
}

/// Emits the interface artifact.
#[derive(Debug, Clone)]
pub struct HeaderEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> HeaderEmitter<'a> {
    /// Create a header emitter for `config`
    pub fn new(config: &'a GeneratorConfig) -> Self {
        HeaderEmitter { config }
    }
}

impl ArtifactEmitter for HeaderEmitter<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Header
    }

    fn render(&self, _model: &StumpModel) -> String {
        render_header(self.config)
    }
}

/// Emits the implementation artifact.
#[derive(Debug, Clone)]
pub struct SourceEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SourceEmitter<'a> {
    /// Create a source emitter for `config`
    pub fn new(config: &'a GeneratorConfig) -> Self {
        SourceEmitter { config }
    }
}

impl ArtifactEmitter for SourceEmitter<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Source
    }

    fn render(&self, model: &StumpModel) -> String {
        render_source(model, self.config)
    }
}

/// Write the interface declaration to `sink`.
pub fn emit_header(config: &GeneratorConfig, sink: &mut dyn Write) -> Result<()> {
    sink.write_all(render_header(config).as_bytes())?;
    Ok(())
}

/// Write the classifier implementation for `model` to `sink`.
pub fn emit_source(model: &StumpModel, config: &GeneratorConfig, sink: &mut dyn Write) -> Result<()> {
    SourceEmitter::new(config).emit(model, sink)
}
