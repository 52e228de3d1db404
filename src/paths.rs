//! Minecraft root directory resolution
//!
//! The root is either supplied via `--minecraft-path` or auto-detected
//! at the platform-default launcher location.

use std::path::PathBuf;

use crate::error::{McpackError, Result};

/// Resolve the Minecraft root from the CLI override or platform default
pub fn resolve_minecraft_root(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => default_minecraft_root(),
    }
}

/// Platform-default Minecraft installation directory
pub fn default_minecraft_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| McpackError::Io {
        message: "Could not determine home directory; pass --minecraft-path".to_string(),
    })?;

    #[cfg(target_os = "windows")]
    let root = home.join("AppData").join("Roaming").join(".minecraft");

    #[cfg(target_os = "macos")]
    let root = home
        .join("Library")
        .join("Application Support")
        .join("minecraft");

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let root = home.join(".minecraft");

    Ok(root)
}
