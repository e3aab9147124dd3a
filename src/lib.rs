//! # Pane Shell
//!
//! A window layout engine for terminal applications.
//!
//! Windows form a composite tree owned by a [`WindowsManager`]. Layouts
//! turn that tree into rectangles: a [`StackLayout`] packs windows along
//! one axis and a [`BorderLayout`] carves the screen into north, south,
//! east, west and center regions. Windows draw themselves through the
//! [`Canvas`] seam provided by a [`Host`].
//!
//! ## Core Concepts
//!
//! - **Arena tree**: windows live in a [`WindowTree`] and are addressed by [`WindowId`]
//! - **Fixed vs. flexible**: stacks give fixed windows their minimum and share the rest
//! - **Top-down passes**: a layout finishes its own children before nested layouts run
//! - **Host seam**: the terminal host and the headless host run the same loop
//!
//! ## Example
//!
//! ```rust
//! use paneshell::{Anchor, BorderLayout, HeadlessHost, SizedVector2, Window, WindowsManager};
//!
//! let mut manager = WindowsManager::new(HeadlessHost::new(200.0, 150.0), BorderLayout::default());
//! let sidebar = manager.create_window(
//!     Window::new("files")
//!         .with_anchor(Anchor::West)
//!         .with_min_size(SizedVector2::new(30.0, 0.0)),
//! )?;
//! let editor = manager.create_window(Window::new("editor"))?;
//!
//! manager.on_init()?;
//! assert!(manager.window(sidebar)?.rect().right() <= manager.window(editor)?.position.x);
//! # Ok::<(), paneshell::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod manager;
pub mod style;
pub mod window;

// Re-exports for convenience
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, TerminalCanvas};
pub use error::{Error, Result};
pub use geometry::{Axis, CellRect, Grid4, Rect, SizedVector2, Vector2};
pub use host::{HeadlessHost, Host, HostEvent, TerminalConfig, TerminalHost};
pub use layout::{BorderConfig, BorderLayout, Layout, LayoutKind, LayoutParent, StackConfig, StackLayout};
pub use manager::{ManagerConfig, WindowsManager};
pub use style::{Palette, Rgb, WindowStyle};
pub use window::{Anchor, TreeError, Window, WindowFlags, WindowId, WindowTree};
