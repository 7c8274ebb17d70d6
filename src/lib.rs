//! Vector Sketch - the document model behind a freehand line drawing tool
//!
//! Strokes are kept in a [`StrokeHistory`] with linear undo/redo, and saved as
//! SVG documents made of one `line` element per stroke segment.
//!
//! # Example
//!
//! ```rust
//! use vector_sketch::{decode, encode, Color, Point, Stroke, StrokeHistory};
//!
//! let mut history = StrokeHistory::new();
//! let stroke = Stroke::new(
//!     vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)],
//!     Color::new("red"),
//!     2.0,
//! )
//! .unwrap();
//! history.commit(stroke);
//!
//! let svg = encode(history.current(), 800.0, 600.0);
//! assert_eq!(svg.as_str().matches("<line").count(), 2);
//!
//! // Each segment comes back as its own stroke
//! history.reset(decode(svg.as_str()).unwrap());
//! assert_eq!(history.len(), 2);
//! ```

pub mod codec;
pub mod error;
pub mod model;
pub mod session;
pub mod settings;

pub use codec::{decode, encode, encode_with_config, SvgConfig, SvgDocument};
pub use error::{MalformedDocument, SessionError, StrokeError};
pub use model::{Color, Point, Stroke, StrokeHistory};
pub use session::{Pen, Session};
pub use settings::{Settings, SettingsError};

/// Decode a document and encode it again with `config`
///
/// The result holds the same segments as the input, with everything that is
/// not a `line` element dropped and unsupported colors replaced.
///
/// # Example
///
/// ```rust
/// use vector_sketch::{normalize, SvgConfig};
///
/// let source = r#"<svg xmlns="http://www.w3.org/2000/svg">
///     <rect width="10" height="10"/>
///     <line x1="0" y1="0" x2="4" y2="4" stroke="rgb(1,2,3)"/>
/// </svg>"#;
///
/// let svg = normalize(source, &SvgConfig::default()).unwrap();
/// assert!(svg.as_str().contains(r#"stroke="black""#));
/// assert!(!svg.as_str().contains("<rect"));
/// ```
pub fn normalize(source: &str, config: &SvgConfig) -> Result<SvgDocument, MalformedDocument> {
    let strokes = decode(source)?;
    Ok(encode_with_config(&strokes, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_segments() {
        let source = encode(
            &[Stroke::new(
                vec![Point::new(1.0, 1.0), Point::new(2.0, 3.0), Point::new(4.0, 1.0)],
                Color::new("blue"),
                3.0,
            )
            .unwrap()],
            320.0,
            240.0,
        );
        let svg = normalize(source.as_str(), &SvgConfig::new().with_size(320.0, 240.0)).unwrap();
        assert_eq!(svg, source);
    }

    #[test]
    fn test_normalize_error() {
        let result = normalize("<svg", &SvgConfig::default());
        assert!(matches!(result, Err(MalformedDocument::Markup { .. })));
    }
}
