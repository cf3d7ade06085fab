//! Platform-specific directory utilities.

use std::path::PathBuf;

/// Platform config directory for archetype bonuses, if the platform has one.
///
/// - macOS: `~/Library/Application Support/archetype`
/// - Linux: `~/.config/archetype` (or `$XDG_CONFIG_HOME/archetype`)
/// - Windows: `%APPDATA%\archetype\config`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "archetype").map(|dirs| dirs.config_dir().to_path_buf())
}
