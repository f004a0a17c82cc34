//! One generator run: read a model, render both artifacts, write them.
//!
//! The model is read and both artifacts are rendered in memory before any
//! file is opened, so invalid input leaves the output directory untouched.

use crate::codegen::{ArtifactEmitter, ArtifactKind, HeaderEmitter, SourceEmitter};
use crate::config::GeneratorConfig;
use crate::core::error::Result;
use crate::io::{ensure_output_dir, write_artifact, ModelReader};
use crate::model::StumpModel;
use std::path::{Path, PathBuf};

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Interface artifact path
    pub header_path: PathBuf,
    /// Implementation artifact path
    pub source_path: PathBuf,
    /// Entries in the `classes` table
    pub num_classes: usize,
    /// Boosting rounds read
    pub num_hypotheses: usize,
    /// `votes[n] += ...` statements emitted
    pub num_vote_statements: usize,
}

/// Rendered artifacts, not yet written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedArtifacts {
    /// Interface artifact text
    pub header: String,
    /// Implementation artifact text
    pub source: String,
}

impl RenderedArtifacts {
    /// Text of one artifact
    pub fn text(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Header => &self.header,
            ArtifactKind::Source => &self.source,
        }
    }

    fn text_mut(&mut self, kind: ArtifactKind) -> &mut String {
        match kind {
            ArtifactKind::Header => &mut self.header,
            ArtifactKind::Source => &mut self.source,
        }
    }
}

/// Drives the reader and emitter.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator for `config`
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Output path for an artifact kind.
    pub fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        match kind {
            ArtifactKind::Header => self.config.header_path(),
            ArtifactKind::Source => self.config.source_path(),
        }
    }

    /// Render both artifacts for an already-parsed model.
    pub fn render(&self, model: &StumpModel) -> RenderedArtifacts {
        let header = HeaderEmitter::new(&self.config);
        let source = SourceEmitter::new(&self.config);
        let emitters: [&dyn ArtifactEmitter; 2] = [&header, &source];

        let mut rendered = RenderedArtifacts::default();
        for emitter in emitters {
            let text = emitter.render(model);
            log::debug!("rendered {:?} artifact: {} bytes", emitter.kind(), text.len());
            *rendered.text_mut(emitter.kind()) = text;
        }
        rendered
    }

    /// Generate the classifier for the model at `model_path`.
    pub fn run<P: AsRef<Path>>(&self, model_path: P) -> Result<GenerationReport> {
        let model_path = model_path.as_ref();
        self.config.validate()?;

        let model = ModelReader::read_file(model_path)?;
        log::info!(
            "{}: {} classes, {} weak hypotheses",
            model_path.display(),
            model.num_classes(),
            model.num_hypotheses()
        );
        for (feature, count) in model.feature_usage() {
            log::debug!("feature {} used by {} hypotheses", feature, count);
        }

        self.write(&model)
    }

    /// Render and write both artifacts for `model`.
    pub fn write(&self, model: &StumpModel) -> Result<GenerationReport> {
        let rendered = self.render(model);

        ensure_output_dir(&self.config.output_dir)?;
        for kind in ArtifactKind::ALL {
            write_artifact(&self.artifact_path(kind), rendered.text(kind).as_bytes())?;
        }

        Ok(GenerationReport {
            header_path: self.artifact_path(ArtifactKind::Header),
            source_path: self.artifact_path(ArtifactKind::Source),
            num_classes: model.num_classes(),
            num_hypotheses: model.num_hypotheses(),
            num_vote_statements: model.num_vote_statements(),
        })
    }
}
