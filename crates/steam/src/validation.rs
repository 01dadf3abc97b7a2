//! Validation of caller-supplied identifiers and folders.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::SteamError;

/// Numeric Steam game (app) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(u32);

impl GameId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for GameId {
    type Err = SteamError;

    /// Accepts plain decimal digits only; signs and whitespace inside the
    /// number are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SteamError::InvalidGameId("game ID cannot be empty".into()));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SteamError::InvalidGameId(format!(
                "game ID must be numeric: {s}"
            )));
        }
        s.parse::<u32>()
            .map(GameId)
            .map_err(|e| SteamError::InvalidGameId(format!("{s}: {e}")))
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks that `path` names an existing directory.
pub fn validate_dir(path: &Path) -> Result<PathBuf, SteamError> {
    if path.as_os_str().is_empty() {
        return Err(SteamError::InvalidPath("path cannot be empty".into()));
    }

    let metadata = std::fs::metadata(path).map_err(|e| {
        SteamError::InvalidPath(format!("{}: {e}", path.display()))
    })?;

    if !metadata.is_dir() {
        return Err(SteamError::InvalidPath(format!(
            "not a directory: {}",
            path.display()
        )));
    }

    Ok(path.to_path_buf())
}
