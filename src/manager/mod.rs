//! Manager module: the root of a managed window tree.
//!
//! A [`WindowsManager`] owns the tree, the top-level layout and the host.
//! It sizes itself from the host screen, re-runs layout on every resize and
//! redraws windows that asked for it.

mod config;
mod windows;

pub use config::ManagerConfig;
pub use windows::WindowsManager;
