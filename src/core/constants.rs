//! Document tag names and output defaults for stumpgen.
//!
//! The tag names describe the model XML layout; the defaults describe the
//! generated artifacts and match what `features.h` consumers expect.

/// Container element for one boosting round.
pub const TAG_WEAKHYP: &str = "weakhyp";

/// Confidence weight of a hypothesis.
pub const TAG_ALPHA: &str = "alpha";

/// Comparison value of a hypothesis.
pub const TAG_THRESHOLD: &str = "threshold";

/// Feature name inspected by a hypothesis.
pub const TAG_COLUMN: &str = "column";

/// Per-class vote; in the first hypothesis it also registers the class id.
pub const TAG_CLASS: &str = "class";

/// Attribute carrying the class identifier.
pub const ATTR_CLASS_ID: &str = "id";

/// Default interface artifact name.
pub const DEFAULT_HEADER_FILE: &str = "classifier.h";

/// Default implementation artifact name.
pub const DEFAULT_SOURCE_FILE: &str = "classifier.cc";

/// Default include guard macro for the interface artifact.
pub const DEFAULT_INCLUDE_GUARD: &str = "CLASSIFIER_INCLUDED";

/// Header declaring the feature descriptors and `objs_t`.
pub const DEFAULT_FEATURES_HEADER: &str = "features.h";

/// Prefix of the generated local holding a feature's value.
pub const VALUE_PREFIX: &str = "value";

/// Environment variable naming a configuration file.
pub const ENV_CONFIG: &str = "STUMPGEN_CONFIG";

/// Environment override for the output directory.
pub const ENV_OUTPUT_DIR: &str = "STUMPGEN_OUTPUT_DIR";

/// Environment override for the interface artifact name.
pub const ENV_HEADER_FILE: &str = "STUMPGEN_HEADER_FILE";

/// Environment override for the implementation artifact name.
pub const ENV_SOURCE_FILE: &str = "STUMPGEN_SOURCE_FILE";
