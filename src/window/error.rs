//! Tree error types.

use super::WindowId;
use thiserror::Error;

/// Structural errors raised by the window tree.
///
/// Name collisions never show up here: they are resolved by renaming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// No child with this name under the given parent.
    #[error("window not found: {0}")]
    NotFound(String),

    /// The id does not refer to a live window.
    #[error("unknown window id: {0:?}")]
    UnknownWindow(WindowId),

    /// The window already belongs to a parent.
    #[error("window {name} is already attached to a parent")]
    AlreadyAttached {
        /// Name of the offending window.
        name: String,
    },

    /// Attaching would make a window its own ancestor.
    #[error("attaching {name} would create a cycle")]
    Cycle {
        /// Name of the offending window.
        name: String,
    },
}

/// Error returned when parsing an anchor name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized anchor: {0}")]
pub struct ParseAnchorError(pub String);
