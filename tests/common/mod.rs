//! Common test utilities for stumpgen integration tests.

#![allow(dead_code)]

/// One `<weakhyp>` in a generated fixture.
#[derive(Debug, Clone)]
pub struct HypFixture {
    pub alpha: String,
    pub threshold: String,
    pub column: String,
    pub votes: Vec<String>,
}

impl HypFixture {
    pub fn new(alpha: &str, threshold: &str, column: &str, votes: &[&str]) -> Self {
        HypFixture {
            alpha: alpha.to_string(),
            threshold: threshold.to_string(),
            column: column.to_string(),
            votes: votes.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Build a model document. The class ids are attached to the first
/// hypothesis's votes, matching how the registry is declared.
pub fn model_xml(class_ids: &[String], hyps: &[HypFixture]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<model>\n");
    for (index, hyp) in hyps.iter().enumerate() {
        xml.push_str("  <weakhyp>\n");
        xml.push_str(&format!("    <alpha>{}</alpha>\n", hyp.alpha));
        xml.push_str(&format!("    <threshold>{}</threshold>\n", hyp.threshold));
        xml.push_str(&format!("    <column>{}</column>\n", hyp.column));
        for (slot, vote) in hyp.votes.iter().enumerate() {
            match class_ids.get(slot) {
                Some(id) if index == 0 => {
                    xml.push_str(&format!("    <class id=\"{}\">{}</class>\n", id, vote))
                }
                _ => xml.push_str(&format!("    <class>{}</class>\n", vote)),
            }
        }
        xml.push_str("  </weakhyp>\n");
    }
    xml.push_str("</model>\n");
    xml
}

/// Two classes, two rounds, one of them using a descriptor variable spelling.
pub fn small_model_xml() -> String {
    let ids = vec!["65".to_string(), "66".to_string()];
    model_xml(
        &ids,
        &[
            HypFixture::new("0.75", "1.5", "AspectRatio", &["0.25", "-0.25"]),
            HypFixture::new("2", "0.5", "topPosition", &["3", "-3"]),
        ],
    )
}

/// Lines of the form `  votes[n] += ...`.
pub fn vote_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter(|l| l.trim_start().starts_with("votes[") && l.contains("+="))
        .collect()
}
