//! Geometry: value types the layout engine computes with.
//!
//! Everything here is `Copy` and free of layout logic. Units are abstract;
//! the terminal host maps one unit to one cell.

mod axis;
mod grid;
mod rect;
mod vector;

pub use axis::Axis;
pub use grid::Grid4;
pub use rect::{CellRect, Rect};
pub use vector::{SizedVector2, Vector2};
