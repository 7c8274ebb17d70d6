//! Error types for stroke construction, document decoding and sessions

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A stroke that cannot be built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrokeError {
    #[error("a stroke needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("stroke width must be a finite, non-negative number, got {width}")]
    InvalidWidth { width: f64 },

    #[error("point {index} of the stroke has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// An SVG document that cannot be turned back into strokes
///
/// Decoding never returns a partial result: any of these aborts the whole load.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedDocument {
    /// The input is not well-formed markup
    #[error("malformed document: {message} at {row}:{col}")]
    Markup {
        message: String,
        row: u32,
        col: u32,
    },

    /// A line element lacks a required attribute
    #[error("malformed document: line {index} is missing attribute '{attribute}'")]
    MissingAttribute {
        index: usize,
        attribute: &'static str,
        span: Span,
    },

    /// A numeric attribute does not hold a usable number
    #[error("malformed document: line {index} has invalid {attribute} \"{value}\"")]
    InvalidNumber {
        index: usize,
        attribute: &'static str,
        value: String,
        span: Span,
    },
}

impl MalformedDocument {
    pub fn missing(index: usize, attribute: &'static str, span: Span) -> Self {
        Self::MissingAttribute {
            index,
            attribute,
            span,
        }
    }

    pub fn invalid_number(
        index: usize,
        attribute: &'static str,
        value: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::InvalidNumber {
            index,
            attribute,
            value: value.into(),
            span,
        }
    }

    /// Locate the error in `source` as a byte range
    pub fn span(&self, source: &str) -> Span {
        match self {
            Self::Markup { row, col, .. } => {
                let offset = offset_of(source, *row, *col);
                offset..offset
            }
            Self::MissingAttribute { span, .. } | Self::InvalidNumber { span, .. } => span.clone(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span(source);
        let label = match self {
            Self::Markup { message, .. } => message.clone(),
            Self::MissingAttribute { attribute, .. } => {
                format!("required attribute '{}' is missing", attribute)
            }
            Self::InvalidNumber {
                attribute, value, ..
            } => format!("'{}' must be a finite number, found \"{}\"", attribute, value),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl From<roxmltree::Error> for MalformedDocument {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        Self::Markup {
            message: err.to_string(),
            row: pos.row,
            col: pos.col,
        }
    }
}

/// Convert a 1-based row/column position into a byte offset
fn offset_of(source: &str, row: u32, col: u32) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(row.saturating_sub(1) as usize)
        .map(str::len)
        .sum();
    let line = source[line_start..].split('\n').next().unwrap_or_default();
    let in_line: usize = line
        .chars()
        .take(col.saturating_sub(1) as usize)
        .map(char::len_utf8)
        .sum();
    (line_start + in_line).min(source.len())
}

/// Errors from loading or saving a document in a session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] MalformedDocument),
}

impl SessionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
