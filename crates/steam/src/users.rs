use std::fs;

use serde::{Deserialize, Serialize};

use crate::SteamError;
use crate::paths::Paths;

/// A Steam user found under `userdata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub has_screenshots: bool,
}

/// Returns a list of Steam users from the userdata directory.
pub fn get_users() -> Result<Vec<User>, SteamError> {
    let paths = Paths::new()?;
    get_users_with_paths(&paths)
}

/// Returns users using the provided `Paths` instance, sorted by ID.
pub fn get_users_with_paths(paths: &Paths) -> Result<Vec<User>, SteamError> {
    let user_data_dir = paths.user_data_dir();

    let entries = fs::read_dir(&user_data_dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SteamError::NotFound
        } else {
            SteamError::Io(e.to_string())
        }
    })?;

    let mut users = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SteamError::Io(e.to_string()))?;

        if !entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();

        // Steam account IDs are numeric.
        if name.parse::<u64>().is_err() {
            continue;
        }

        // "0" is a temporary directory, not a real user.
        if name == "0" {
            continue;
        }

        let has_screenshots = paths.has_screenshots(&name);
        users.push(User {
            id: name.into_owned(),
            has_screenshots,
        });
    }

    users.sort_by_key(|u| u.id.parse::<u64>().unwrap_or(u64::MAX));
    Ok(users)
}

/// Returns the only Steam user on this machine.
///
/// Fails with [`SteamError::AmbiguousUser`] when several exist, since the
/// importer has no way to guess which account owns the game.
pub fn sole_user(paths: &Paths) -> Result<User, SteamError> {
    let mut users = get_users_with_paths(paths)?;
    match users.len() {
        0 => Err(SteamError::UserNotFound),
        1 => Ok(users.remove(0)),
        _ => {
            let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
            Err(SteamError::AmbiguousUser(ids.join(", ")))
        }
    }
}
