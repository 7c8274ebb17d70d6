//! Core drawing types: points, colors and strokes

use std::fmt;

use crate::error::StrokeError;

/// A 2D point in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An opaque stroke color
///
/// The value is kept verbatim. Whether the SVG decoder honors it is decided by
/// [`Color::is_supported`]: hex literals and plain keywords are kept, anything
/// else (functional notations such as `rgb(...)`) falls back to [`Color::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Color used when none is given or the given one is unsupported
    pub const DEFAULT: &'static str = "black";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Resolve a raw color string, replacing unsupported encodings with the default
    pub fn resolve(raw: &str) -> Self {
        let color = Self::new(raw.trim());
        if color.is_supported() {
            color
        } else {
            Self::default()
        }
    }

    /// True for hex literals (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) and
    /// keywords made only of ASCII letters (`red`, `none`, `currentColor`)
    ///
    /// Anything starting with `rgb` is never a keyword.
    pub fn is_supported(&self) -> bool {
        let value = self.0.as_str();
        if let Some(hex) = value.strip_prefix('#') {
            return matches!(hex.len(), 3 | 4 | 6 | 8)
                && hex.chars().all(|c| c.is_ascii_hexdigit());
        }
        let rgb_prefixed = value
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb"));
        !value.is_empty() && !rgb_prefixed && value.chars().all(|c| c.is_ascii_alphabetic())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A committed freehand stroke
///
/// Always holds at least two finite points and a finite, non-negative width.
/// Strokes are immutable; edits build a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
    width: f64,
}

impl Stroke {
    /// Width used when none is given
    pub const DEFAULT_WIDTH: f64 = 1.0;

    pub fn new(points: Vec<Point>, color: Color, width: f64) -> Result<Self, StrokeError> {
        if points.len() < 2 {
            return Err(StrokeError::TooFewPoints {
                count: points.len(),
            });
        }
        if !width.is_finite() || width < 0.0 {
            return Err(StrokeError::InvalidWidth { width });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(StrokeError::NonFiniteCoordinate { index });
        }
        Ok(Self {
            points,
            color,
            width,
        })
    }

    /// A single straight segment from `start` to `end`
    pub fn line(start: Point, end: Point, color: Color, width: f64) -> Result<Self, StrokeError> {
        Self::new(vec![start, end], color, width)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Consecutive point pairs, one per rendered segment
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Same geometry with a different color
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }
}
