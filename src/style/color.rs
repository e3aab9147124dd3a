//! Rgb: 24-bit colour used by palettes and canvases.

use std::fmt;

/// A colour as three 8-bit channels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a colour from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`. Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Raise every channel by `amount`, saturating at 255.
    #[inline]
    #[must_use]
    pub const fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// Lower every channel by `amount`, saturating at 0.
    #[inline]
    #[must_use]
    pub const fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        assert_eq!(Rgb::from_hex("#1e1d1d"), Some(Rgb::new(30, 29, 29)));
        assert_eq!(Rgb::from_hex("DAC09C"), Some(Rgb::new(218, 192, 156)));
        assert_eq!(Rgb::new(30, 29, 29).to_string(), "#1e1d1d");
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn test_lighten_and_darken_saturate() {
        assert_eq!(Rgb::new(30, 29, 29).lighten(5), Rgb::new(35, 34, 34));
        assert_eq!(Rgb::new(253, 0, 0).lighten(5), Rgb::new(255, 5, 5));
        assert_eq!(Rgb::new(3, 10, 0).darken(5), Rgb::new(0, 5, 0));
    }
}
