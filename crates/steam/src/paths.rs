use std::fs;
use std::path::{Path, PathBuf};

use crate::SteamError;
use crate::validation::GameId;

/// Steam's own app ID, under which remote screenshot storage lives.
pub const SCREENSHOTS_APP_ID: &str = "760";

/// Provides access to Steam directory paths.
pub struct Paths {
    base_dir: PathBuf,
}

impl Paths {
    /// Creates a new `Paths` instance with auto-detected Steam directory.
    pub fn new() -> Result<Self, SteamError> {
        let base_dir = get_base_dir()?;
        tracing::debug!(base_dir = %base_dir.display(), "detected steam installation");
        Ok(Self { base_dir })
    }

    /// Creates a new `Paths` instance with a custom base directory.
    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the userdata directory.
    pub fn user_data_dir(&self) -> PathBuf {
        self.base_dir.join("userdata")
    }

    /// Returns the directory for a specific user.
    pub fn user_dir(&self, user_id: &str) -> PathBuf {
        self.user_data_dir().join(user_id)
    }

    /// Returns the remote storage directory for a user (`760/remote`).
    pub fn remote_dir(&self, user_id: &str) -> PathBuf {
        remote_dir_in(&self.user_dir(user_id))
    }

    /// Returns the screenshot layout of a game for a user.
    pub fn screenshot_dir(&self, user_id: &str, game_id: GameId) -> ScreenshotDir {
        ScreenshotDir::for_user_dir(self.user_dir(user_id), game_id)
    }

    /// Returns true if the user has any remote screenshot storage.
    pub fn has_screenshots(&self, user_id: &str) -> bool {
        self.remote_dir(user_id).is_dir()
    }
}

fn remote_dir_in(user_dir: &Path) -> PathBuf {
    user_dir.join(SCREENSHOTS_APP_ID).join("remote")
}

/// Screenshot folder of one game inside one user's userdata directory.
///
/// Steam expects `<user>/760/remote/<gameID>/screenshots` with a
/// `thumbnails` subdirectory next to the full-size images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotDir {
    root: PathBuf,
}

impl ScreenshotDir {
    /// Derives the screenshot folder from a userdata user directory.
    pub fn for_user_dir(user_dir: impl AsRef<Path>, game_id: GameId) -> Self {
        let root = remote_dir_in(user_dir.as_ref())
            .join(game_id.to_string())
            .join("screenshots");
        Self { root }
    }

    /// Directory receiving the imported images.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Thumbnail directory Steam fills in on its own.
    pub fn thumbnails(&self) -> PathBuf {
        self.root.join("thumbnails")
    }

    /// Creates the screenshot and thumbnail directories if missing.
    pub fn ensure(&self) -> Result<(), SteamError> {
        let thumbnails = self.thumbnails();
        fs::create_dir_all(&thumbnails).map_err(|e| {
            SteamError::Io(format!(
                "failed to create {}: {e}",
                thumbnails.display()
            ))
        })?;
        tracing::debug!(path = %self.root.display(), "screenshot directory ready");
        Ok(())
    }
}

// Platform-specific base directory detection.
#[cfg(target_os = "linux")]
fn get_base_dir() -> Result<PathBuf, SteamError> {
    crate::paths_linux::get_base_dir()
}

#[cfg(target_os = "windows")]
fn get_base_dir() -> Result<PathBuf, SteamError> {
    crate::paths_windows::get_base_dir()
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn get_base_dir() -> Result<PathBuf, SteamError> {
    Err(SteamError::NotFound)
}
