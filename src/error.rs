//! Crate-level error type.

use crate::window::TreeError;
use std::io;
use thiserror::Error;

/// Errors surfaced by the manager and hosts.
#[derive(Debug, Error)]
pub enum Error {
    /// A tree-structure violation.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// The host failed to query or draw to the screen.
    #[error("host I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used across the manager surface.
pub type Result<T> = std::result::Result<T, Error>;
