//! Linear undo/redo history over committed strokes

use super::Stroke;

/// The ordered list of visible strokes plus the strokes available for redo
///
/// History is a single timeline: committing a new stroke discards everything
/// that could have been redone.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    committed: Vec<Stroke>,
    undone: Vec<Stroke>,
    revision: u64,
}

impl StrokeHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history whose visible strokes are `strokes`
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self {
            committed: strokes,
            ..Self::default()
        }
    }

    /// Append a finished stroke and drop the redo history
    pub fn commit(&mut self, stroke: Stroke) {
        log::debug!(
            "commit stroke with {} points ({} discarded from redo)",
            stroke.points().len(),
            self.undone.len()
        );
        self.committed.push(stroke);
        self.undone.clear();
        self.touch();
    }

    /// Move the most recent stroke onto the redo stack
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.undone.push(stroke);
                self.touch();
                log::debug!("undo ({} visible, {} undone)", self.committed.len(), self.undone.len());
                true
            }
            None => false,
        }
    }

    /// Restore the most recently undone stroke
    ///
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                self.touch();
                log::debug!("redo ({} visible, {} undone)", self.committed.len(), self.undone.len());
                true
            }
            None => false,
        }
    }

    /// Replace all visible strokes, e.g. after loading a document
    pub fn reset(&mut self, strokes: Vec<Stroke>) {
        if self.undone.is_empty() && self.committed == strokes {
            return;
        }
        log::debug!("reset history with {} strokes", strokes.len());
        self.committed = strokes;
        self.undone.clear();
        self.touch();
    }

    /// Drop every stroke, visible or undone
    pub fn clear(&mut self) {
        if self.committed.is_empty() && self.undone.is_empty() {
            return;
        }
        self.committed.clear();
        self.undone.clear();
        self.touch();
    }

    /// The strokes currently drawn, oldest first
    pub fn current(&self) -> &[Stroke] {
        &self.committed
    }

    /// Strokes eligible for redo, most recently undone last
    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Counter bumped by every call that changes the history
    ///
    /// Renderers can cache their output and redraw only when this changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
