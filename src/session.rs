//! An editing session: pointer capture, pen state, history and persistence
//!
//! The session is what a host UI drives. Pointer events build up a stroke,
//! releases commit it, and documents are loaded from and saved to SVG files.
//! Rendering is left to the host, which redraws from [`Session::strokes`]
//! whenever [`Session::revision`] changes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{decode, encode_with_config, SvgDocument};
use crate::error::{SessionError, StrokeError};
use crate::model::{Color, Point, Stroke, StrokeHistory};
use crate::settings::Settings;

/// Color and width applied to new strokes
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
}

/// A single document being edited
#[derive(Debug, Clone)]
pub struct Session {
    history: StrokeHistory,
    pen: Pen,
    capture: Option<Vec<Point>>,
    settings: Settings,
    path: Option<PathBuf>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            history: StrokeHistory::new(),
            pen: Pen {
                color: settings.pen_color.clone(),
                width: settings.pen_width,
            },
            capture: None,
            settings,
            path: None,
        }
    }

    /// Start capturing a stroke at `point`, dropping any unfinished one
    pub fn press(&mut self, point: Point) {
        if self.capture.is_some() {
            log::debug!("press during an active capture, discarding it");
        }
        self.capture = Some(vec![point]);
    }

    /// Extend the active capture; ignored when nothing was pressed
    pub fn drag(&mut self, point: Point) {
        if let Some(points) = &mut self.capture {
            points.push(point);
        }
    }

    /// Finish the active capture and commit it with the current pen
    ///
    /// Returns true if a stroke was committed. Captures with fewer than two
    /// points (a click without movement) are discarded.
    pub fn release(&mut self) -> bool {
        let Some(points) = self.capture.take() else {
            return false;
        };
        match Stroke::new(points, self.pen.color.clone(), self.pen.width) {
            Ok(stroke) => {
                self.history.commit(stroke);
                true
            }
            Err(StrokeError::TooFewPoints { count }) => {
                log::debug!("discarding capture with {count} point(s)");
                false
            }
            Err(err) => {
                log::warn!("discarding capture: {err}");
                false
            }
        }
    }

    /// Points of the stroke being drawn, for live preview
    pub fn preview(&self) -> Option<&[Point]> {
        self.capture.as_deref()
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.pen.color = color;
    }

    /// Set the pen width, clamped to the configured brush size range
    pub fn set_pen_width(&mut self, width: f64) {
        self.pen.width = self.settings.clamp_pen_width(width);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Start over with a blank, unnamed document
    pub fn new_document(&mut self) {
        self.history.clear();
        self.capture = None;
        self.path = None;
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.history.current()
    }

    pub fn revision(&self) -> u64 {
        self.history.revision()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Path of the document last opened or saved
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the drawing with the strokes decoded from `text`
    ///
    /// On failure the current drawing is left untouched.
    pub fn load_str(&mut self, text: &str) -> Result<(), SessionError> {
        let strokes = decode(text)?;
        self.capture = None;
        self.history.reset(strokes);
        Ok(())
    }

    /// Open an SVG file, replacing the drawing
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SessionError::io(path, e))?;
        self.load_str(&text)?;
        log::info!("opened {} ({} strokes)", path.display(), self.history.len());
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Encode the current drawing with the session's output settings
    pub fn to_svg(&self) -> SvgDocument {
        encode_with_config(self.history.current(), &self.settings.svg_config())
    }

    /// Write the drawing to an SVG file
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref();
        fs::write(path, self.to_svg().as_str()).map_err(|e| SessionError::io(path, e))?;
        log::info!("saved {} ({} strokes)", path.display(), self.history.len());
        self.path = Some(path.to_path_buf());
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
