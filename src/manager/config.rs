//! Manager configuration.

use crate::style::Palette;
use std::time::Duration;

/// Construction-time settings for a [`WindowsManager`](super::WindowsManager).
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerConfig {
    /// Longest wait for a host event before redrawing. `None` blocks until
    /// the next event arrives.
    pub frame_interval: Option<Duration>,
    /// Colours every window created through the manager derives its style from.
    pub palette: Palette,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            frame_interval: Some(Duration::from_secs(1) / 60),
            palette: Palette::default(),
        }
    }
}

impl ManagerConfig {
    /// Set the frame interval.
    #[must_use]
    pub const fn with_frame_interval(mut self, frame_interval: Option<Duration>) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Set the palette.
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
