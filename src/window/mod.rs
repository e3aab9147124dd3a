//! Window module: the composite tree the layout engine walks.
//!
//! Windows are stored in a [`WindowTree`] arena. Parent links are explicit
//! `Option<WindowId>` values; a window without a parent is either the root
//! of a managed tree or detached.

mod error;
mod naming;
mod node;
mod tree;

pub use error::{ParseAnchorError, TreeError};
pub use naming::{next_candidate, unique_name};
pub use node::{Anchor, Window, WindowFlags, WindowId};
pub use tree::WindowTree;
