//! Bonus settings loader.

use std::path::Path;

use archetype_core::BonusSettings;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BonusSettings`] from TOML files.
///
/// Missing keys take their defaults, so an empty file means "enabled".
pub struct SettingsLoader;

impl SettingsLoader {
    pub fn load(path: &Path) -> LoadResult<BonusSettings> {
        let content = read_file(path)?;
        let settings: BonusSettings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        Ok(settings)
    }
}
