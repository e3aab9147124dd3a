//! Palette and WindowStyle: explicit appearance configuration.
//!
//! A `Palette` is passed to the manager at construction time and every
//! window created through it derives its `WindowStyle` from that palette.

use super::Rgb;

/// The five-colour balance windows are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen and window background.
    pub background: Rgb,
    /// Text drawn on the background.
    pub on_background: Rgb,
    /// Raised surfaces.
    pub surface: Rgb,
    /// Primary accent.
    pub primary: Rgb,
    /// Secondary accent.
    pub secondary: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(30, 29, 29),
            on_background: Rgb::new(234, 234, 234),
            surface: Rgb::new(52, 49, 42),
            primary: Rgb::new(127, 105, 85),
            secondary: Rgb::new(218, 192, 156),
        }
    }
}

/// How a single window draws its background and title bar.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowStyle {
    /// Body fill.
    pub background: Rgb,
    /// Title bar fill.
    pub title_background: Rgb,
    /// Title text colour.
    pub title_color: Rgb,
    /// Title bar height in layout units.
    pub title_height: f32,
    /// Glyph drawn before the title text.
    pub title_icon: Option<char>,
    /// Title text. Falls back to the window name when unset.
    pub title: Option<String>,
}

impl WindowStyle {
    /// Derive a style from a palette.
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            background: palette.background,
            title_background: palette.background.lighten(5),
            title_color: palette.on_background,
            title_height: 1.0,
            title_icon: None,
            title: None,
        }
    }

    /// Set the title text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title icon glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: char) -> Self {
        self.title_icon = Some(icon);
        self
    }

    /// Set the body fill.
    #[must_use]
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }
}

impl Default for WindowStyle {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_palette() {
        let style = WindowStyle::from_palette(&Palette::default());
        assert_eq!(style.background, Rgb::new(30, 29, 29));
        assert_eq!(style.title_background, Rgb::new(35, 34, 34));
        assert_eq!(style.title_color, Rgb::new(234, 234, 234));
        assert!(style.title.is_none());
    }

    #[test]
    fn test_style_builders() {
        let style = WindowStyle::default().with_title("Console").with_icon('>');
        assert_eq!(style.title.as_deref(), Some("Console"));
        assert_eq!(style.title_icon, Some('>'));
    }
}
