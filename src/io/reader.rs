//! Model reader: XML document to [`StumpModel`].
//!
//! The document is parsed once with `roxmltree`, then walked in a single
//! typed pass. Every hypothesis is read before the model is returned, so a
//! caller never sees a partially-read model.

use crate::core::constants::*;
use crate::core::error::{Result, StructuralError, StumpgenError};
use crate::model::{ClassSet, FeatureRef, StumpModel, WeakHypothesis};
use roxmltree::{Document, Node, ParsingOptions};
use std::io;
use std::path::Path;

/// Encoding labels decoded byte-for-byte as ISO-8859-1.
const LATIN1_LABELS: &[&str] = &["iso-8859-1", "iso8859-1", "iso_8859-1", "latin1", "latin-1", "l1"];

/// Reads boosted-stump models from XML.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelReader;

impl ModelReader {
    /// Read and parse a model file.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<StumpModel> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        let text = decode_document(bytes)?;
        Self::parse_str(&text)
    }

    /// Parse a model from document text.
    pub fn parse_str(text: &str) -> Result<StumpModel> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options)?;

        let hyp_nodes: Vec<Node<'_, '_>> = doc
            .descendants()
            .filter(|n| n.has_tag_name(TAG_WEAKHYP))
            .collect();
        let first = hyp_nodes.first().ok_or(StructuralError::NoHypotheses)?;

        let classes = read_class_set(*first)?;
        log::debug!("class registry: {:?}", classes.ids());

        let hypotheses = hyp_nodes
            .iter()
            .enumerate()
            .map(|(index, node)| read_hypothesis(index, *node, classes.len()))
            .collect::<Result<Vec<_>>>()?;

        StumpModel::new(classes, hypotheses)
    }
}

/// The `encoding` value of the XML declaration, if there is one.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&bytes[..end]).ok()?;
    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    Some(value[..value.find(quote)?].to_string())
}

/// Decode raw model bytes into text. Documents declaring ISO-8859-1 are
/// mapped byte-for-byte; everything else must be UTF-8.
fn decode_document(bytes: Vec<u8>) -> Result<String> {
    match declared_encoding(&bytes) {
        Some(label) if LATIN1_LABELS.contains(&label.to_ascii_lowercase().as_str()) => {
            log::debug!("decoding model as {}", label);
            Ok(bytes.iter().map(|&b| char::from(b)).collect())
        }
        _ => String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into()),
    }
}

/// Descendant elements of `node` with the given tag, excluding `node` itself.
fn elements_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

/// The element's content when it is exactly one text node.
fn single_text<'a>(
    element: Node<'a, '_>,
    hypothesis: usize,
    tag: &'static str,
) -> std::result::Result<&'a str, StructuralError> {
    let mut children = element.children();
    match (children.next(), children.next()) {
        (Some(child), None) if child.is_text() => child
            .text()
            .ok_or(StructuralError::NonTextContent {
                hypothesis,
                element: tag,
            }),
        _ => Err(StructuralError::NonTextContent {
            hypothesis,
            element: tag,
        }),
    }
}

/// Text of the one `tag` element under a hypothesis.
fn scalar(node: Node<'_, '_>, hypothesis: usize, tag: &'static str) -> Result<String> {
    let matches: Vec<Node<'_, '_>> = elements_named(node, tag).collect();
    match matches.as_slice() {
        [element] => Ok(single_text(*element, hypothesis, tag)?.to_string()),
        [] => Err(StructuralError::MissingElement {
            hypothesis,
            element: tag,
        }
        .into()),
        many => Err(StructuralError::DuplicateElement {
            hypothesis,
            element: tag,
            count: many.len(),
        }
        .into()),
    }
}

fn read_class_set(first: Node<'_, '_>) -> Result<ClassSet> {
    let ids = elements_named(first, TAG_CLASS)
        .enumerate()
        .map(|(index, class)| {
            class
                .attribute(ATTR_CLASS_ID)
                .map(str::to_string)
                .ok_or(StructuralError::MissingAttribute {
                    hypothesis: 0,
                    index,
                    attribute: ATTR_CLASS_ID,
                })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    ClassSet::new(ids)
}

fn read_hypothesis(index: usize, node: Node<'_, '_>, num_classes: usize) -> Result<WeakHypothesis> {
    let alpha = scalar(node, index, TAG_ALPHA)?;
    let threshold = scalar(node, index, TAG_THRESHOLD)?;
    let column = scalar(node, index, TAG_COLUMN)?;

    let feature = FeatureRef::resolve(&column)
        .ok_or_else(|| StumpgenError::undefined_feature(index, column.as_str()))?;

    let class_votes = elements_named(node, TAG_CLASS)
        .map(|vote| single_text(vote, index, TAG_CLASS).map(str::to_string))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if class_votes.len() != num_classes {
        return Err(StructuralError::ClassCountMismatch {
            hypothesis: index,
            expected: num_classes,
            actual: class_votes.len(),
        }
        .into());
    }

    log::trace!(
        "weakhyp #{}: alpha={} threshold={} column={} votes={:?}",
        index,
        alpha,
        threshold,
        column,
        class_votes
    );

    Ok(WeakHypothesis {
        alpha,
        threshold,
        feature,
        class_votes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Feature;

    const TWO_ROUNDS: &str = r#"<?xml version="1.0"?>
<model>
  <weakhyp>
    <alpha>0.75</alpha>
    <threshold>1.5e-1</threshold>
    <column>AspectRatio</column>
    <class id="65">0.25</class>
    <class id="66">-0.25</class>
  </weakhyp>
  <weakhyp>
    <alpha>2</alpha>
    <threshold>0.5</threshold>
    <column>topPosition</column>
    <class id="65">3</class>
    <class id="66">-3</class>
  </weakhyp>
</model>"#;

    #[test]
    fn test_parse_two_rounds() {
        let model = ModelReader::parse_str(TWO_ROUNDS).unwrap();
        assert_eq!(model.classes().ids(), &["65".to_string(), "66".to_string()]);
        assert_eq!(model.num_hypotheses(), 2);

        let first = &model.hypotheses()[0];
        assert_eq!(first.alpha, "0.75");
        assert_eq!(first.threshold, "1.5e-1");
        assert_eq!(first.feature.feature, Feature::AspectRatio);
        assert_eq!(first.class_votes, vec!["0.25", "-0.25"]);

        let second = &model.hypotheses()[1];
        assert_eq!(second.feature.column, "topPosition");
        assert_eq!(second.feature.feature, Feature::TopPosition);
    }

    #[test]
    fn test_literals_are_verbatim() {
        let xml = "<m><weakhyp><alpha>+1.000</alpha><threshold>.5</threshold>\
                   <column>TopPosition</column><class id=\"x\">1e3</class></weakhyp></m>";
        let model = ModelReader::parse_str(xml).unwrap();
        let hyp = &model.hypotheses()[0];
        assert_eq!(hyp.alpha, "+1.000");
        assert_eq!(hyp.threshold, ".5");
        assert_eq!(hyp.class_votes, vec!["1e3"]);
        assert_eq!(model.classes().ids(), &["x".to_string()]);
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let err = ModelReader::parse_str("<weakhyp><alpha>1</weakhyp>").unwrap_err();
        assert_eq!(err.category(), "parse");
    }

    #[test]
    fn test_missing_threshold() {
        let xml = "<m><weakhyp><alpha>1</alpha><column>TopPosition</column>\
                   <class id=\"1\">1</class></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert_eq!(err.category(), "structural");
        assert!(err.to_string().contains("weakhyp #0: missing <threshold>"));
    }

    #[test]
    fn test_duplicate_alpha() {
        let xml = "<m><weakhyp><alpha>1</alpha><alpha>2</alpha><threshold>0</threshold>\
                   <column>TopPosition</column><class id=\"1\">1</class></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert!(err.to_string().contains("expected one <alpha>, found 2"));
    }

    #[test]
    fn test_empty_scalar_is_non_text() {
        let xml = "<m><weakhyp><alpha></alpha><threshold>0</threshold>\
                   <column>TopPosition</column><class id=\"1\">1</class></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert!(err.to_string().contains("<alpha> must contain a single text node"));
    }

    #[test]
    fn test_nested_markup_is_non_text() {
        let xml = "<m><weakhyp><alpha>1</alpha><threshold><v>0</v></threshold>\
                   <column>TopPosition</column><class id=\"1\">1</class></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert!(err.to_string().contains("<threshold> must contain a single text node"));
    }

    #[test]
    fn test_class_without_id() {
        let xml = "<m><weakhyp><alpha>1</alpha><threshold>0</threshold>\
                   <column>TopPosition</column><class id=\"1\">1</class><class>2</class>\
                   </weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert!(err.to_string().contains("<class> #1 has no 'id' attribute"));
    }

    #[test]
    fn test_no_weakhyp() {
        let err = ModelReader::parse_str("<model/>").unwrap_err();
        assert!(err.to_string().contains("no <weakhyp>"));
    }

    #[test]
    fn test_first_weakhyp_without_classes() {
        let xml = "<m><weakhyp><alpha>1</alpha><threshold>0</threshold>\
                   <column>TopPosition</column></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert!(err.to_string().contains("declares no <class>"));
    }

    #[test]
    fn test_vote_count_mismatch() {
        let xml = "<m>\
            <weakhyp><alpha>1</alpha><threshold>0</threshold><column>TopPosition</column>\
            <class id=\"1\">1</class><class id=\"2\">-1</class></weakhyp>\
            <weakhyp><alpha>1</alpha><threshold>0</threshold><column>TopPosition</column>\
            <class>1</class></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert!(err.to_string().contains("weakhyp #1: expected 2 <class> votes, found 1"));
    }

    #[test]
    fn test_unknown_feature() {
        let xml = "<m><weakhyp><alpha>1</alpha><threshold>0</threshold>\
                   <column>LeftPosition</column><class id=\"1\">1</class></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert!(matches!(
            err,
            StumpgenError::UndefinedFeature { hypothesis: 0, ref name } if name == "LeftPosition"
        ));
    }

    #[test]
    fn test_doctype_is_accepted() {
        let xml = "<?xml version=\"1.0\"?>\n<!DOCTYPE model>\n<model><weakhyp>\
                   <alpha><![CDATA[1.5]]></alpha><threshold>&#48;.5</threshold>\
                   <column>TopPosition</column><class id=\"1\">1</class></weakhyp></model>";
        let model = ModelReader::parse_str(xml).unwrap();
        let hyp = &model.hypotheses()[0];
        assert_eq!(hyp.alpha, "1.5");
        assert_eq!(hyp.threshold, "0.5");
    }

    #[test]
    fn test_empty_vote_in_later_hypothesis() {
        let xml = "<m>\
            <weakhyp><alpha>1</alpha><threshold>0</threshold><column>TopPosition</column>\
            <class id=\"1\">1</class><class id=\"2\">-1</class></weakhyp>\
            <weakhyp><alpha>1</alpha><threshold>0</threshold><column>TopPosition</column>\
            <class>1</class><class></class></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert_eq!(err.category(), "structural");
        assert!(err.to_string().contains("weakhyp #1: <class> must contain a single text node"));
    }

    #[test]
    fn test_nested_vote_in_later_hypothesis() {
        let xml = "<m>\
            <weakhyp><alpha>1</alpha><threshold>0</threshold><column>TopPosition</column>\
            <class id=\"1\">1</class></weakhyp>\
            <weakhyp><alpha>1</alpha><threshold>0</threshold><column>TopPosition</column>\
            <class><b>1</b></class></weakhyp></m>";
        let err = ModelReader::parse_str(xml).unwrap_err();
        assert!(err.to_string().contains("weakhyp #1: <class> must contain a single text node"));
    }

    #[test]
    fn test_declared_encoding() {
        assert_eq!(
            declared_encoding(b"<?xml version=\"1.0\" encoding='ISO-8859-1'?><m/>"),
            Some("ISO-8859-1".to_string())
        );
        assert_eq!(declared_encoding(b"<?xml version=\"1.0\"?><m/>"), None);
        assert_eq!(declared_encoding(b"<m/>"), None);
    }

    #[test]
    fn test_read_latin1_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("model.xml");
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\
            <m><weakhyp><alpha>1</alpha><threshold>0</threshold><column>TopPosition</column>\
            <class id=\"caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"\">1</class></weakhyp></m>");
        std::fs::write(&path, bytes).unwrap();

        let model = ModelReader::read_file(&path).unwrap();
        assert_eq!(model.classes().ids(), &["caf\u{e9}".to_string()]);
    }

    #[test]
    fn test_undeclared_non_utf8_is_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("model.xml");
        std::fs::write(&path, [b'<', b'm', 0xE9, b'/', b'>']).unwrap();
        let err = ModelReader::read_file(&path).unwrap_err();
        assert_eq!(err.category(), "io");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = ModelReader::read_file("/nonexistent/stumpgen/model.xml").unwrap_err();
        assert_eq!(err.category(), "io");
    }
}
