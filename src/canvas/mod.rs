//! Canvas: the seam between windows and a drawing backend.
//!
//! Windows draw through [`Canvas`] and never talk to a backend directly.
//! [`TerminalCanvas`] renders to ANSI escape sequences; [`RecordingCanvas`]
//! keeps a list of commands for headless hosts and tests.

mod recording;
mod terminal;

pub use recording::{DrawCommand, RecordingCanvas};
pub use terminal::TerminalCanvas;

use crate::geometry::{Rect, Vector2};
use crate::style::Rgb;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Drawing operations a window needs.
pub trait Canvas {
    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw a single line of text, clipped to `max_width` columns.
    fn draw_text(&mut self, origin: Vector2, text: &str, max_width: f32, fg: Rgb, bg: Rgb);
}

/// Longest prefix of `text` that fits in `max_width` columns, and its width.
///
/// Grapheme clusters are never split.
pub fn clip_to_width(text: &str, max_width: f32) -> (&str, usize) {
    if max_width < 1.0 {
        return ("", 0);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let limit = max_width.floor() as usize;

    let mut width = 0;
    let mut end = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let w = grapheme.width();
        if width + w > limit {
            break;
        }
        width += w;
        end = offset + grapheme.len();
    }
    (&text[..end], width)
}
