//! Layout module: turns a window tree into rectangles.
//!
//! Layouts do not own windows. They keep ordered lists of [`WindowId`]s
//! and, on every pass, read constraints from the tree and write positions
//! and sizes back into it. A pass runs top-down: a layout finishes
//! assigning its own children before any nested layout runs, and only then
//! are the results final.
//!
//! [`WindowId`]: crate::window::WindowId

mod base;
mod border;
mod kind;
mod stack;

pub use base::{Layout, LayoutParent, LayoutState};
pub use border::{BorderConfig, BorderLayout};
pub use kind::LayoutKind;
pub use stack::{StackConfig, StackLayout};
