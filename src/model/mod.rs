//! In-memory drawing model
//!
//! Strokes are the atomic drawable and undoable unit. [`StrokeHistory`] is the
//! single source of truth for what is currently drawn.

pub mod history;
pub mod types;

pub use history::StrokeHistory;
pub use types::{Color, Point, Stroke};
