use std::path::PathBuf;

use crate::SteamError;

/// Returns the Steam base directory on Windows using the registry.
pub(crate) fn get_base_dir() -> Result<PathBuf, SteamError> {
    // 32-bit registry view first (where 64-bit Windows keeps Steam), then
    // the native key of 32-bit Windows.
    [r"SOFTWARE\Wow6432Node\Valve\Steam", r"SOFTWARE\Valve\Steam"]
        .into_iter()
        .find_map(|subkey| read_install_path(subkey).ok())
        .ok_or(SteamError::NotFound)
}

fn read_install_path(subkey: &str) -> Result<PathBuf, SteamError> {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key = hklm.open_subkey(subkey).map_err(|_| SteamError::NotFound)?;
    let install_path: String = key
        .get_value("InstallPath")
        .map_err(|_| SteamError::NotFound)?;
    Ok(PathBuf::from(install_path))
}
