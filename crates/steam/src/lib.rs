//! Steam integration for steamshot.
//!
//! Knows where Steam keeps per-user screenshot folders, which users exist
//! on this machine, and how to validate the identifiers a caller supplies.

pub mod paths;
#[cfg(target_os = "linux")]
mod paths_linux;
#[cfg(target_os = "windows")]
mod paths_windows;
pub mod users;
pub mod validation;

// Re-export primary types.
pub use paths::{Paths, ScreenshotDir};
pub use users::{User, get_users, get_users_with_paths, sole_user};
pub use validation::{GameId, validate_dir};

/// Errors for Steam operations.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("steam installation not found")]
    NotFound,

    #[error("steam user not found")]
    UserNotFound,

    #[error("multiple steam users found ({0}), pick one explicitly")]
    AmbiguousUser(String),

    #[error("invalid steam game ID: {0}")]
    InvalidGameId(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(String),
}
