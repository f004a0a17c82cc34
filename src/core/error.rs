//! Error handling and error types for stumpgen.
//!
//! Every failure in the generator is fatal: the error is propagated with `?`
//! up to the binary, which prints it and exits non-zero. The variants below
//! separate the ways a run can fail so callers and logs can tell a broken
//! XML file from a well-formed file with the wrong shape.

use std::io;
use thiserror::Error;

/// Main error type for the generator.
#[derive(Error, Debug)]
pub enum StumpgenError {
    /// The model document is not well-formed XML
    #[error("XML parse error: {source}")]
    Parse {
        /// Underlying parser error with line and column
        #[from]
        source: roxmltree::Error,
    },

    /// The document is well-formed but does not have the model's shape
    #[error("Structural error: {message}")]
    Structural {
        /// Description of the violation
        message: String,
    },

    /// A hypothesis names a feature the emitter does not know
    #[error("Undefined feature reference in weakhyp #{hypothesis}: '{name}'")]
    UndefinedFeature {
        /// Index of the offending `weakhyp`
        hypothesis: usize,
        /// Column text as written
        name: String,
    },

    /// Configuration loading and validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Invalid configuration values
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },
}

/// Shape violations found while reading a model document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// No `weakhyp` element anywhere in the document
    #[error("document contains no <weakhyp> element")]
    NoHypotheses,

    /// The first `weakhyp` has no `class` children
    #[error("first <weakhyp> declares no <class> elements")]
    EmptyClassSet,

    /// A required element is absent
    #[error("weakhyp #{hypothesis}: missing <{element}>")]
    MissingElement {
        /// Hypothesis index
        hypothesis: usize,
        /// Tag name
        element: &'static str,
    },

    /// A single-valued element appears more than once
    #[error("weakhyp #{hypothesis}: expected one <{element}>, found {count}")]
    DuplicateElement {
        /// Hypothesis index
        hypothesis: usize,
        /// Tag name
        element: &'static str,
        /// Occurrences found
        count: usize,
    },

    /// Element content is empty, nested, or mixed
    #[error("weakhyp #{hypothesis}: <{element}> must contain a single text node")]
    NonTextContent {
        /// Hypothesis index
        hypothesis: usize,
        /// Tag name
        element: &'static str,
    },

    /// A registry `class` element lacks its identifier
    #[error("weakhyp #{hypothesis}: <class> #{index} has no '{attribute}' attribute")]
    MissingAttribute {
        /// Hypothesis index
        hypothesis: usize,
        /// Position among the `class` elements
        index: usize,
        /// Attribute name
        attribute: &'static str,
    },

    /// A hypothesis does not vote once per class
    #[error("weakhyp #{hypothesis}: expected {expected} <class> votes, found {actual}")]
    ClassCountMismatch {
        /// Hypothesis index
        hypothesis: usize,
        /// Registry size
        expected: usize,
        /// Votes found
        actual: usize,
    },
}

/// Type alias for Results using StumpgenError
pub type Result<T> = std::result::Result<T, StumpgenError>;

impl StumpgenError {
    /// Create an undefined feature reference error
    pub fn undefined_feature<S: Into<String>>(hypothesis: usize, name: S) -> Self {
        StumpgenError::UndefinedFeature {
            hypothesis,
            name: name.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        StumpgenError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        StumpgenError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            StumpgenError::Parse { .. } => "parse",
            StumpgenError::Structural { .. } => "structural",
            StumpgenError::UndefinedFeature { .. } => "undefined_feature",
            StumpgenError::Config { .. } => "config",
            StumpgenError::InvalidParameter { .. } => "invalid_parameter",
            StumpgenError::IO { .. } => "io",
        }
    }

    /// True when the failure came from the model document rather than the
    /// environment (configuration or filesystem).
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            StumpgenError::Parse { .. }
                | StumpgenError::Structural { .. }
                | StumpgenError::UndefinedFeature { .. }
        )
    }
}

impl From<StructuralError> for StumpgenError {
    fn from(err: StructuralError) -> Self {
        StumpgenError::Structural {
            message: err.to_string(),
        }
    }
}

/// Return early with `$err` when `$cond` does not hold
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
