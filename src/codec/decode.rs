//! Reading strokes back from SVG documents

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::MalformedDocument;
use crate::model::{Color, Point, Stroke};

use super::SVG_NAMESPACE;

/// Decode every SVG `line` element into a 2-point stroke, in document order
///
/// Other elements are skipped. Multi-segment strokes written by [`encode`]
/// come back as one stroke per segment.
///
/// [`encode`]: super::encode
pub fn decode(document: &str) -> Result<Vec<Stroke>, MalformedDocument> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(document, options)?;

    let strokes = doc
        .descendants()
        .filter(|node| node.has_tag_name((SVG_NAMESPACE, "line")))
        .enumerate()
        .map(|(index, node)| decode_line(index, node))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("decoded {} line elements", strokes.len());
    Ok(strokes)
}

fn decode_line(index: usize, node: Node<'_, '_>) -> Result<Stroke, MalformedDocument> {
    let start = Point::new(
        required_number(index, node, "x1")?,
        required_number(index, node, "y1")?,
    );
    let end = Point::new(
        required_number(index, node, "x2")?,
        required_number(index, node, "y2")?,
    );

    let color = match node.attribute("stroke") {
        Some(raw) => {
            let color = Color::resolve(raw);
            if color.as_str() != raw.trim() {
                log::debug!("line {index}: unsupported stroke color {raw:?}, using {color}");
            }
            color
        }
        None => Color::default(),
    };

    let width = match node.attribute("stroke-width") {
        Some(raw) => parse_number(raw).filter(|width| *width >= 0.0).ok_or_else(|| {
            MalformedDocument::invalid_number(index, "stroke-width", raw, node.range())
        })?,
        None => Stroke::DEFAULT_WIDTH,
    };

    // Only fails on width or coordinates, both checked by the parsing above
    Stroke::line(start, end, color, width).map_err(|_| {
        MalformedDocument::invalid_number(index, "stroke-width", width.to_string(), node.range())
    })
}

fn required_number(
    index: usize,
    node: Node<'_, '_>,
    attribute: &'static str,
) -> Result<f64, MalformedDocument> {
    let raw = node
        .attribute(attribute)
        .ok_or_else(|| MalformedDocument::missing(index, attribute, node.range()))?;
    parse_number(raw)
        .ok_or_else(|| MalformedDocument::invalid_number(index, attribute, raw, node.range()))
}

/// Parse a finite real number, tolerating surrounding whitespace
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(body: &str) -> String {
        format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600">{body}</svg>"#)
    }

    #[test]
    fn test_decode_single_line() {
        let strokes = decode(&wrap(
            r##"<line x1="1" y1="2" x2="3.5" y2="-4" stroke="#ff0000" stroke-width="3"/>"##,
        ))
        .unwrap();
        assert_eq!(strokes.len(), 1);
        assert_eq!(
            strokes[0].points(),
            &[Point::new(1.0, 2.0), Point::new(3.5, -4.0)]
        );
        assert_eq!(strokes[0].color().as_str(), "#ff0000");
        assert_eq!(strokes[0].width(), 3.0);
    }

    #[test]
    fn test_decode_defaults() {
        let strokes = decode(&wrap(r#"<line x1="0" y1="0" x2="1" y2="1"/>"#)).unwrap();
        assert_eq!(strokes[0].color().as_str(), "black");
        assert_eq!(strokes[0].width(), 1.0);
    }

    #[test]
    fn test_decode_functional_color_falls_back() {
        let strokes = decode(&wrap(
            r#"<line x1="0" y1="0" x2="1" y2="1" stroke="rgb(10,10,10)"/>"#,
        ))
        .unwrap();
        assert_eq!(strokes[0].color().as_str(), "black");
    }

    #[test]
    fn test_decode_skips_other_elements() {
        let strokes = decode(&wrap(
            r#"<rect x="0" y="0" width="5" height="5"/>
               <g><line x1="0" y1="0" x2="1" y2="1"/></g>
               <path d="M0 0 L1 1"/>
               <line x1="2" y1="2" x2="3" y2="3"/>"#,
        ))
        .unwrap();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[1].points()[0], Point::new(2.0, 2.0));
    }

    #[test]
    fn test_decode_ignores_lines_outside_svg_namespace() {
        let strokes = decode(r#"<svg><line x1="0" y1="0" x2="1" y2="1"/></svg>"#).unwrap();
        assert!(strokes.is_empty());
    }

    #[test]
    fn test_decode_missing_coordinate() {
        let err = decode(&wrap(r#"<line x1="0" y1="0" y2="1"/>"#)).unwrap_err();
        assert!(matches!(
            err,
            MalformedDocument::MissingAttribute {
                index: 0,
                attribute: "x2",
                ..
            }
        ));
    }

    #[test]
    fn test_decode_non_numeric_coordinate() {
        let err = decode(&wrap(
            r#"<line x1="0" y1="0" x2="1" y2="1"/><line x1="a" y1="0" x2="1" y2="1"/>"#,
        ))
        .unwrap_err();
        match err {
            MalformedDocument::InvalidNumber {
                index,
                attribute,
                value,
                ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(attribute, "x1");
                assert_eq!(value, "a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_non_finite_and_negative_values() {
        assert!(decode(&wrap(r#"<line x1="NaN" y1="0" x2="1" y2="1"/>"#)).is_err());
        assert!(decode(&wrap(r#"<line x1="0" y1="inf" x2="1" y2="1"/>"#)).is_err());
        assert!(decode(&wrap(r#"<line x1="0" y1="0" x2="1" y2="1" stroke-width="-2"/>"#)).is_err());
        assert!(decode(&wrap(r#"<line x1="0" y1="0" x2="1" y2="1" stroke-width="2px"/>"#)).is_err());
    }

    #[test]
    fn test_decode_not_markup() {
        let err = decode("<svg><line></svg>").unwrap_err();
        assert!(matches!(err, MalformedDocument::Markup { .. }));
    }

    #[test]
    fn test_decode_error_span_covers_element() {
        let source = wrap(r#"<line x1="0" y1="0" x2="1"/>"#);
        let err = decode(&source).unwrap_err();
        let span = err.span(&source);
        assert!(source[span].starts_with("<line"));
    }

    #[test]
    fn test_decode_accepts_doctype() {
        let source = format!(
            r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
{}"#,
            wrap(r#"<line x1="0" y1="0" x2="1" y2="1"/>"#)
        );
        assert_eq!(decode(&source).unwrap().len(), 1);
    }
}
