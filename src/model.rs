//! In-memory form of a boosted decision-stump model.
//!
//! All numeric values are kept as the literal text found in the document:
//! the emitter copies them into the generated source unchanged, so the
//! model never parses or reformats a number.

use crate::core::error::{Result, StructuralError};
use crate::core::types::{ClassSlot, Feature};
use std::collections::BTreeMap;

/// Ordered class identifiers. Position `n` is vote slot `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSet {
    ids: Vec<String>,
}

impl ClassSet {
    /// Build a class set, rejecting an empty registry.
    pub fn new(ids: Vec<String>) -> Result<Self> {
        crate::ensure!(!ids.is_empty(), StructuralError::EmptyClassSet);
        Ok(ClassSet { ids })
    }

    /// Number of classes (and vote slots).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when there are no classes; never the case once constructed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier for a vote slot.
    pub fn id(&self, slot: ClassSlot) -> Option<&str> {
        self.ids.get(slot).map(String::as_str)
    }

    /// Identifiers in slot order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// The feature a hypothesis inspects, with the spelling used in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRef {
    /// Resolved descriptor
    pub feature: Feature,
    /// Column text exactly as written in the document
    pub column: String,
}

impl FeatureRef {
    /// Resolve column text, or `None` when no descriptor matches.
    pub fn resolve(column: &str) -> Option<Self> {
        Feature::from_column(column).map(|feature| FeatureRef {
            feature,
            column: column.to_string(),
        })
    }

    /// True when the column uses the descriptor's canonical column name.
    pub fn is_canonical(&self) -> bool {
        self.column == self.feature.column_name()
    }
}

/// One boosting round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeakHypothesis {
    /// Confidence weight literal
    pub alpha: String,
    /// Comparison value literal
    pub threshold: String,
    /// Feature compared against the threshold
    pub feature: FeatureRef,
    /// Vote literal per class slot
    pub class_votes: Vec<String>,
}

/// A complete model: the class registry and hypotheses in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StumpModel {
    classes: ClassSet,
    hypotheses: Vec<WeakHypothesis>,
}

impl StumpModel {
    /// Assemble a model, checking every hypothesis votes for every class.
    pub fn new(classes: ClassSet, hypotheses: Vec<WeakHypothesis>) -> Result<Self> {
        crate::ensure!(!hypotheses.is_empty(), StructuralError::NoHypotheses);
        for (index, hyp) in hypotheses.iter().enumerate() {
            if hyp.class_votes.len() != classes.len() {
                return Err(StructuralError::ClassCountMismatch {
                    hypothesis: index,
                    expected: classes.len(),
                    actual: hyp.class_votes.len(),
                }
                .into());
            }
        }
        Ok(StumpModel {
            classes,
            hypotheses,
        })
    }

    /// The class registry.
    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    /// Hypotheses in document order.
    pub fn hypotheses(&self) -> &[WeakHypothesis] {
        &self.hypotheses
    }

    /// Number of classes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Number of boosting rounds.
    pub fn num_hypotheses(&self) -> usize {
        self.hypotheses.len()
    }

    /// Number of `votes[n] += ...` statements the model expands to.
    pub fn num_vote_statements(&self) -> usize {
        self.num_classes() * self.num_hypotheses()
    }

    /// How many hypotheses inspect each feature.
    pub fn feature_usage(&self) -> BTreeMap<Feature, usize> {
        let mut usage = BTreeMap::new();
        for hyp in &self.hypotheses {
            *usage.entry(hyp.feature.feature).or_insert(0) += 1;
        }
        usage
    }

    /// Column spellings that are not canonical column names, in order of
    /// first appearance. The emitter declares an alias for each.
    pub fn alias_spellings(&self) -> Vec<&FeatureRef> {
        let mut seen: Vec<&FeatureRef> = Vec::new();
        for hyp in &self.hypotheses {
            if !hyp.feature.is_canonical() && !seen.iter().any(|r| r.column == hyp.feature.column) {
                seen.push(&hyp.feature);
            }
        }
        seen
    }
}
