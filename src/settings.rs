//! Editor settings loaded from TOML
//!
//! Every key is optional; missing keys take the values of the built-in
//! defaults (an 800x600 canvas and a black pen of width 1).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::codec::config::is_valid_dimension;
use crate::codec::SvgConfig;
use crate::model::Color;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Resolved editor settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Canvas width used when saving
    pub canvas_width: f64,
    /// Canvas height used when saving
    pub canvas_height: f64,
    /// Color of new strokes
    pub pen_color: Color,
    /// Width of new strokes
    pub pen_width: f64,
    /// Largest pen width the brush size control allows
    pub max_pen_width: f64,
    /// Indent saved documents
    pub pretty_print: bool,
    /// Write the XML declaration when saving
    pub standalone: bool,
}

/// TOML structure for deserializing settings
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlSettings {
    canvas: TomlCanvas,
    pen: TomlPen,
    output: TomlOutput,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlCanvas {
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlPen {
    color: Option<String>,
    width: Option<f64>,
    max_width: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlOutput {
    pretty_print: Option<bool>,
    standalone: Option<bool>,
}

const DEFAULT_SETTINGS: &str = r#"
[canvas]
width = 800
height = 600

[pen]
color = "black"
width = 1
max_width = 100

[output]
pretty_print = true
standalone = true
"#;

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string, filling gaps from the defaults
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let defaults: TomlSettings = toml::from_str(DEFAULT_SETTINGS)?;
        let parsed: TomlSettings = toml::from_str(content)?;
        Ok(Self::merge(parsed, defaults))
    }

    fn merge(parsed: TomlSettings, defaults: TomlSettings) -> Self {
        let max_pen_width = parsed
            .pen
            .max_width
            .or(defaults.pen.max_width)
            .unwrap_or(100.0)
            .max(0.0);
        let pen_width = parsed.pen.width.or(defaults.pen.width).unwrap_or(1.0);
        let pen_color = parsed
            .pen
            .color
            .or(defaults.pen.color)
            .map(|raw| Color::resolve(&raw))
            .unwrap_or_default();

        Settings {
            canvas_width: parsed
                .canvas
                .width
                .filter(|w| is_valid_dimension(*w))
                .or(defaults.canvas.width)
                .unwrap_or(800.0),
            canvas_height: parsed
                .canvas
                .height
                .filter(|h| is_valid_dimension(*h))
                .or(defaults.canvas.height)
                .unwrap_or(600.0),
            pen_color,
            pen_width: clamp_width(pen_width, max_pen_width),
            max_pen_width,
            pretty_print: parsed
                .output
                .pretty_print
                .or(defaults.output.pretty_print)
                .unwrap_or(true),
            standalone: parsed
                .output
                .standalone
                .or(defaults.output.standalone)
                .unwrap_or(true),
        }
    }

    /// The encoder configuration these settings describe
    pub fn svg_config(&self) -> SvgConfig {
        SvgConfig::new()
            .with_size(self.canvas_width, self.canvas_height)
            .with_pretty_print(self.pretty_print)
            .with_standalone(self.standalone)
    }

    /// Clamp a requested pen width into the allowed range
    pub fn clamp_pen_width(&self, width: f64) -> f64 {
        clamp_width(width, self.max_pen_width)
    }
}

fn clamp_width(width: f64, max: f64) -> f64 {
    if width.is_nan() {
        0.0
    } else {
        width.clamp(0.0, max)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_str("").expect("Default settings should be valid TOML")
    }
}
