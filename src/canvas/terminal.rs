//! `TerminalCanvas`: renders draw calls to a single ANSI byte buffer.
//!
//! Output is accumulated and flushed in one `write()` so a frame never
//! shows half-drawn.

use super::{clip_to_width, Canvas};
use crate::geometry::{Rect, SizedVector2, Vector2};
use crate::style::Rgb;
use std::io::Write;

/// Canvas backed by a pre-allocated escape-sequence buffer.
#[derive(Debug)]
pub struct TerminalCanvas {
    data: Vec<u8>,
    columns: u16,
    rows: u16,
}

impl TerminalCanvas {
    /// Create a canvas for a terminal of the given size.
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            data: Vec::with_capacity(4096),
            columns,
            rows,
        }
    }

    /// Update the clip area after a terminal resize.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
    }

    /// Pending bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check if nothing is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop pending output.
    #[inline]
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Write pending output in a single call and reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.data.extend_from_slice(b"\x1b[0m");
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    // Writes into a Vec<u8> cannot fail.
    fn cursor_move(&mut self, x: u16, y: u16) {
        let _ = write!(self.data, "\x1b[{};{}H", y + 1, x + 1);
    }

    fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }
}

impl Canvas for TerminalCanvas {
    fn clear(&mut self, color: Rgb) {
        self.data.clear();
        self.set_bg(color);
        self.data.extend_from_slice(b"\x1b[2J");
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let cells = rect.to_cells();
        let right = cells.x.saturating_add(cells.width).min(self.columns);
        let bottom = cells.y.saturating_add(cells.height).min(self.rows);
        if cells.x >= right || cells.y >= bottom {
            return;
        }
        self.set_bg(color);
        let blank = " ".repeat(usize::from(right - cells.x));
        for row in cells.y..bottom {
            self.cursor_move(cells.x, row);
            self.data.extend_from_slice(blank.as_bytes());
        }
    }

    fn draw_text(&mut self, origin: Vector2, text: &str, max_width: f32, fg: Rgb, bg: Rgb) {
        let start = Rect::new(origin, SizedVector2::ZERO).to_cells();
        if start.x >= self.columns || start.y >= self.rows {
            return;
        }
        let room = max_width.min(f32::from(self.columns - start.x));
        let (visible, _) = clip_to_width(text, room);
        if visible.is_empty() {
            return;
        }
        self.cursor_move(start.x, start.y);
        self.set_fg(fg);
        self.set_bg(bg);
        self.data.extend_from_slice(visible.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_emits_rows() {
        let mut canvas = TerminalCanvas::new(80, 24);
        canvas.fill_rect(Rect::from_xywh(1.0, 2.0, 3.0, 2.0), Rgb::new(1, 2, 3));

        let out = String::from_utf8(canvas.as_bytes().to_vec()).unwrap();
        assert_eq!(out, "\x1b[48;2;1;2;3m\x1b[3;2H   \x1b[4;2H   ");
    }

    #[test]
    fn test_fill_rect_clips_to_screen() {
        let mut canvas = TerminalCanvas::new(4, 1);
        canvas.fill_rect(Rect::from_xywh(2.0, 0.0, 10.0, 5.0), Rgb::BLACK);

        let out = String::from_utf8(canvas.as_bytes().to_vec()).unwrap();
        assert!(out.ends_with("\x1b[1;3H  "));

        canvas.reset();
        canvas.fill_rect(Rect::from_xywh(10.0, 0.0, 1.0, 1.0), Rgb::BLACK);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_draw_text_clips() {
        let mut canvas = TerminalCanvas::new(10, 5);
        canvas.draw_text(Vector2::new(7.0, 0.0), "Console", 20.0, Rgb::WHITE, Rgb::BLACK);

        let out = String::from_utf8(canvas.as_bytes().to_vec()).unwrap();
        assert!(out.starts_with("\x1b[1;8H"));
        assert!(out.ends_with("Con"));
    }

    #[test]
    fn test_flush_resets_buffer() {
        let mut canvas = TerminalCanvas::new(10, 5);
        canvas.clear(Rgb::BLACK);
        let mut sink = Vec::new();

        canvas.flush_to(&mut sink).unwrap();

        assert!(canvas.is_empty());
        assert!(sink.ends_with(b"\x1b[0m"));
        assert!(sink.starts_with(b"\x1b[48;2;0;0;0m\x1b[2J"));
    }
}
