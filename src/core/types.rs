//! Core data types for stumpgen.
//!
//! The generated classifier can only reference the three feature descriptors
//! declared in `features.h`; [`Feature`] is the closed set of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot index into the generated `votes` accumulator.
pub type ClassSlot = usize;

/// Feature descriptors available to the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    /// Height over width of the subject's bounding box
    AspectRatio,
    /// Alignment of the subject's top edge with its neighbours
    TopPosition,
    /// Alignment of the subject's bottom edge with its neighbours
    BottomPosition,
}

impl Feature {
    /// All features, in the order the generated prologue declares them.
    pub const ALL: [Feature; 3] = [
        Feature::AspectRatio,
        Feature::TopPosition,
        Feature::BottomPosition,
    ];

    /// Attribute name reported by the descriptor's `name()`.
    pub fn column_name(self) -> &'static str {
        match self {
            Feature::AspectRatio => "AspectRatio",
            Feature::TopPosition => "TopPosition",
            Feature::BottomPosition => "BottomPosition",
        }
    }

    /// Local variable holding the descriptor instance.
    pub fn variable_name(self) -> &'static str {
        match self {
            Feature::AspectRatio => "aspectRatio",
            Feature::TopPosition => "topPosition",
            Feature::BottomPosition => "bottomPosition",
        }
    }

    /// C++ class implementing the descriptor.
    pub fn descriptor_type(self) -> &'static str {
        match self {
            Feature::AspectRatio => "AspectRatioFeature",
            Feature::TopPosition => "TopPositionFeature",
            Feature::BottomPosition => "BottomPositionFeature",
        }
    }

    /// Resolve a model's column text. Both the column name and the
    /// descriptor variable name are accepted, by exact match.
    pub fn from_column(text: &str) -> Option<Feature> {
        Feature::ALL
            .into_iter()
            .find(|f| f.column_name() == text || f.variable_name() == text)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
