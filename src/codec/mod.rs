//! Transcoding between strokes and SVG documents
//!
//! Encoding writes one `line` element per stroke segment. Decoding reads every
//! `line` back as its own 2-point stroke, so an encode/decode round trip keeps
//! the rendered geometry but not the grouping of segments into strokes.

pub mod config;
pub mod decode;
pub mod encode;

pub use config::SvgConfig;
pub use decode::decode;
pub use encode::{encode, encode_with_config, SvgBuilder, SvgDocument};

/// Namespace of the SVG elements read and written by the codec
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
