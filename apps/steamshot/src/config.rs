//! steamshot configuration management.
//!
//! Configuration is stored as TOML:
//! - Linux: `~/.config/steamshot/config.toml`
//! - Windows: `%APPDATA%/steamshot/config.toml`

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use steamshot_importer::ImportOptions;

/// Persistent defaults for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Userdata directory of the Steam account to import into
    /// (e.g. `~/.steam/steam/userdata/1111111`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userdata: Option<PathBuf>,

    /// Defaults for every import run.
    #[serde(default)]
    pub import: ImportOptions,
}

impl Config {
    /// Loads configuration from `path`, or the platform default location.
    ///
    /// A missing file is created with default values; if that write fails
    /// the defaults are still returned.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_path(),
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("invalid config {}", path.display()))?;
            tracing::debug!(path = %path.display(), "configuration loaded");
            Ok(config)
        } else {
            let config = Config::default();
            if let Err(e) = config.save_to(path) {
                tracing::warn!(path = %path.display(), error = %e, "could not write default config");
            }
            Ok(config)
        }
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        // Restrict permissions on Unix.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata).join("steamshot").join("config.toml")
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home)
            .join(".config")
            .join("steamshot")
            .join("config.toml")
    }
}
