//! RecordingCanvas: keeps draw calls as data.

use super::{clip_to_width, Canvas};
use crate::geometry::{Rect, Vector2};
use crate::style::Rgb;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Whole-surface fill.
    Clear(Rgb),
    /// Rectangle fill.
    FillRect {
        /// Area filled.
        rect: Rect,
        /// Fill colour.
        color: Rgb,
    },
    /// Text run, already clipped.
    Text {
        /// Position of the first column.
        origin: Vector2,
        /// Visible text.
        text: String,
        /// Text colour.
        fg: Rgb,
        /// Background colour.
        bg: Rgb,
    },
}

/// Canvas that records every call.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty canvas.
    pub const fn new() -> Self {
        Self { commands: Vec::new() }
    }

    /// Commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the canvas empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgb) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, origin: Vector2, text: &str, max_width: f32, fg: Rgb, bg: Rgb) {
        let (visible, _) = clip_to_width(text, max_width);
        if visible.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            origin,
            text: visible.to_string(),
            fg,
            bg,
        });
    }
}
