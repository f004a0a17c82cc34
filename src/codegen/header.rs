//! Interface artifact: the `classify` declaration.
//!
//! The text depends only on the configuration, never on the model.

use crate::codegen::builder::SourceBuilder;
use crate::config::GeneratorConfig;

/// Render the interface declaration.
pub fn render_header(config: &GeneratorConfig) -> String {
    let guard = &config.include_guard;
    let mut b = SourceBuilder::new();
    b.line_fmt(format_args!("#ifndef {guard}"))
        .line_fmt(format_args!("#define {guard} 1"))
        .line_fmt(format_args!(
            "#include \"{features}\"",
            features = config.features_header
        ))
        .line("int classify(objs_t &, size_t);")
        .line_fmt(format_args!("#endif //{guard}"));
    b.finish()
}
