use std::path::PathBuf;

use crate::SteamError;

/// Returns the Steam base directory on Linux.
///
/// Native installs are checked before the Flatpak sandbox.
pub(crate) fn get_base_dir() -> Result<PathBuf, SteamError> {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or(SteamError::NotFound)?;

    candidates(&home)
        .into_iter()
        .find(|dir| dir.join("userdata").is_dir())
        .ok_or(SteamError::NotFound)
}

fn candidates(home: &std::path::Path) -> Vec<PathBuf> {
    vec![
        home.join(".steam").join("steam"),
        home.join(".local").join("share").join("Steam"),
        home.join(".var")
            .join("app")
            .join("com.valvesoftware.Steam")
            .join(".steam")
            .join("steam"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_in_priority_order() {
        let dirs = candidates(std::path::Path::new("/home/deck"));
        assert_eq!(dirs[0], PathBuf::from("/home/deck/.steam/steam"));
        assert_eq!(dirs[1], PathBuf::from("/home/deck/.local/share/Steam"));
        assert!(dirs[2].ends_with("com.valvesoftware.Steam/.steam/steam"));
    }
}
