//! Style: colours and per-window appearance settings.

mod color;
mod palette;

pub use color::Rgb;
pub use palette::{Palette, WindowStyle};
