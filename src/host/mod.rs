//! Host: the windowing surface a manager runs on.
//!
//! A host reports the screen size, delivers events and owns the canvas
//! frames are drawn to. Everything else (input dispatch, rendering
//! details) stays on the host's side of this seam.
//!
//! ```text
//! ┌──────────────┐  HostEvent   ┌─────────────────┐
//! │ Input Thread │ ───────────▶ │ WindowsManager  │
//! └──────────────┘              │  do_layout()    │
//!                               │  on_draw()      │
//!                               └────────┬────────┘
//!                                        │ Canvas
//!                                        ▼
//!                               ┌─────────────────┐
//!                               │ Terminal output │
//!                               └─────────────────┘
//! ```

mod headless;
mod input;
mod terminal;

pub use headless::HeadlessHost;
pub use input::InputActor;
pub use terminal::{TerminalConfig, TerminalHost};

use crate::canvas::Canvas;
use crate::geometry::SizedVector2;
use std::io;
use std::time::Duration;

/// Events a host delivers to the manager.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The screen changed size.
    Resize {
        /// New width in layout units.
        width: f32,
        /// New height in layout units.
        height: f32,
    },
    /// The user asked to close the application.
    CloseRequested,
    /// The host hit a recoverable error.
    Error(String),
}

/// A windowing surface.
pub trait Host {
    /// Current size of the (single) screen.
    fn screen_size(&self) -> io::Result<SizedVector2>;

    /// Wait up to `timeout` for the next event; `None` waits indefinitely.
    fn next_event(&mut self, timeout: Option<Duration>) -> Option<HostEvent>;

    /// Surface the next frame is drawn to.
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Show the frame drawn since the last call.
    fn present(&mut self) -> io::Result<()>;
}
