//! Implementation artifact: the `classes` table and the `classify` body.
//!
//! Class identifiers appear only in the `classes` table; the body works on
//! vote slots `0..N`. Alpha, threshold and vote literals are copied from the
//! model text without reformatting.

use crate::codegen::builder::SourceBuilder;
use crate::config::GeneratorConfig;
use crate::core::constants::VALUE_PREFIX;
use crate::core::types::{ClassSlot, Feature};
use crate::model::{StumpModel, WeakHypothesis};

/// Generated identifier holding the value of a feature as spelled in a model.
pub fn value_identifier(column: &str) -> String {
    format!("{VALUE_PREFIX}{column}")
}

/// One accumulation statement for a class slot.
pub fn vote_statement(hyp: &WeakHypothesis, slot: ClassSlot, vote: &str) -> String {
    format!(
        "  votes[{slot}] += {alpha} * ({threshold} < {value} ? {vote} : -({vote}));",
        alpha = hyp.alpha,
        threshold = hyp.threshold,
        value = value_identifier(&hyp.feature.column),
    )
}

/// Render the classifier implementation.
pub fn render_source(model: &StumpModel, config: &GeneratorConfig) -> String {
    let n = model.num_classes();
    let mut b = SourceBuilder::new();

    b.line_fmt(format_args!("#include \"{}\"", config.header_file))
        .line_fmt(format_args!(
            "static int classes[{n}] = {{{ids}}};",
            ids = model.classes().ids().join(", ")
        ))
        .lines(["int", "classify(objs_t &objs, size_t subject)", "{"]);

    write_prologue(&mut b, model);
    b.line_fmt(format_args!("  double votes[{n}] = {{0}};")).blank();

    for hyp in model.hypotheses() {
        for (slot, vote) in hyp.class_votes.iter().enumerate() {
            b.line(vote_statement(hyp, slot, vote));
        }
    }

    b.line("  double max = votes[0];")
        .line("  size_t best = 0;")
        .line_fmt(format_args!("  for (size_t i = 0; i < {n}; ++i)"))
        .lines([
            "    if (max < votes[i]) {",
            "      max = votes[i];",
            "      best = i;",
            "    }",
            "  return classes[best];",
            "}",
        ]);

    log::debug!(
        "rendered {} lines for {} hypotheses x {} classes",
        b.line_count(),
        model.num_hypotheses(),
        n
    );
    b.finish()
}

/// Descriptor instances, their values, and aliases for non-canonical
/// spellings used by the model.
fn write_prologue(b: &mut SourceBuilder, model: &StumpModel) {
    for feature in Feature::ALL {
        b.line_fmt(format_args!(
            "  {ty} {var};",
            ty = feature.descriptor_type(),
            var = feature.variable_name()
        ));
    }
    for feature in Feature::ALL {
        b.line_fmt(format_args!(
            "  double {value} = {var}.describe(objs, subject);",
            value = value_identifier(feature.column_name()),
            var = feature.variable_name()
        ));
    }
    for alias in model.alias_spellings() {
        b.line_fmt(format_args!(
            "  double {value} = {canonical};",
            value = value_identifier(&alias.column),
            canonical = value_identifier(alias.feature.column_name())
        ));
    }
}
