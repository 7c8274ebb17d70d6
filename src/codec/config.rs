//! Configuration for SVG encoding

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Canvas width declared on the root element
    pub width: f64,

    /// Canvas height declared on the root element
    pub height: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to put each element on its own indented line
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            standalone: true,
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared canvas size
    ///
    /// Dimensions that are negative or not finite are ignored and the previous
    /// value is kept.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        if is_valid_dimension(width) {
            self.width = width;
        } else {
            log::warn!("ignoring invalid canvas width {width}");
        }
        if is_valid_dimension(height) {
            self.height = height;
        } else {
            log::warn!("ignoring invalid canvas height {height}");
        }
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

/// True for finite, non-negative canvas dimensions
pub fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
