//! SVG generation from strokes

use std::fmt;

use crate::model::{Point, Stroke};

use super::{SvgConfig, SVG_NAMESPACE};

/// An encoded SVG document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument(String);

impl SvgDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SvgDocument {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for SvgDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add one round-capped line segment
    pub fn add_line(&mut self, start: Point, end: Point, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"{}<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            self.indent_str(),
            start.x,
            start.y,
            end.x,
            end.y,
            escape_xml(stroke),
            stroke_width
        ));
    }

    /// Add every segment of a stroke
    pub fn add_stroke(&mut self, stroke: &Stroke) {
        for (start, end) in stroke.segments() {
            self.add_line(start, end, stroke.color().as_str(), stroke.width());
        }
    }

    /// Build the final SVG document
    pub fn build(self) -> SvgDocument {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="{}" version="1.2" baseProfile="tiny" width="{}" height="{}">"#,
            SVG_NAMESPACE, self.config.width, self.config.height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        SvgDocument(svg)
    }
}

/// Encode strokes as one `line` element per segment on a canvas of the given size
pub fn encode(strokes: &[Stroke], width: f64, height: f64) -> SvgDocument {
    encode_with_config(strokes, &SvgConfig::default().with_size(width, height))
}

/// Encode strokes with full control over the output
pub fn encode_with_config(strokes: &[Stroke], config: &SvgConfig) -> SvgDocument {
    let mut builder = SvgBuilder::new(config.clone());
    for stroke in strokes {
        builder.add_stroke(stroke);
    }
    builder.build()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    fn zigzag() -> Stroke {
        Stroke::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(10.0, 0.0),
            ],
            Color::new("red"),
            2.0,
        )
        .unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#""x""#), "&quot;x&quot;");
    }

    #[test]
    fn test_encode_zigzag() {
        let svg = encode(&[zigzag()], 800.0, 600.0);
        insta::assert_snapshot!(svg.as_str().trim_end(), @r###"
        <?xml version="1.0" encoding="UTF-8"?>
        <svg xmlns="http://www.w3.org/2000/svg" version="1.2" baseProfile="tiny" width="800" height="600">
          <line x1="0" y1="0" x2="5" y2="5" stroke="red" stroke-width="2" stroke-linecap="round"/>
          <line x1="5" y1="5" x2="10" y2="0" stroke="red" stroke-width="2" stroke-linecap="round"/>
        </svg>
        "###);
    }

    #[test]
    fn test_encode_empty() {
        let svg = encode(&[], 100.0, 50.0);
        assert!(svg.as_str().contains(r#"width="100" height="50""#));
        assert!(!svg.as_str().contains("<line"));
        assert!(svg.as_str().trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_encode_compact() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false);
        let svg = encode_with_config(&[zigzag()], &config);
        assert!(svg.as_str().starts_with("<svg"));
        assert!(!svg.as_str().contains('\n'));
        assert_eq!(svg.as_str().matches("<line").count(), 2);
    }

    #[test]
    fn test_encode_keeps_fractional_coordinates() {
        let stroke = Stroke::line(
            Point::new(0.25, -3.5),
            Point::new(1e-3, 12.125),
            Color::new("#0af"),
            0.5,
        )
        .unwrap();
        let svg = encode(&[stroke], 10.0, 10.0);
        assert!(svg.as_str().contains(
            r##"x1="0.25" y1="-3.5" x2="0.001" y2="12.125" stroke="#0af" stroke-width="0.5""##
        ));
    }

    #[test]
    fn test_encode_escapes_color() {
        let stroke = Stroke::line(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Color::new(r#"a"b"#),
            1.0,
        )
        .unwrap();
        let svg = encode(&[stroke], 10.0, 10.0);
        assert!(svg.as_str().contains(r#"stroke="a&quot;b""#));
    }
}
