//! Content factory for loading bonus data from a data directory.

use std::path::{Path, PathBuf};

use archetype_core::{ArchetypeBonusConfig, BonusCatalog, BonusSettings};

use crate::loaders::{BonusConfigLoader, LoadResult, SettingsLoader};

/// Content factory that loads bonus content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── settings.toml
/// └── bonuses.toml   (or bonuses.ron)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Bonus file names probed in order.
    pub const BONUS_FILES: [&'static str; 2] = ["bonuses.toml", "bonuses.ron"];
    pub const SETTINGS_FILE: &'static str = "settings.toml";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the first bonus file present in the data directory.
    pub fn bonus_config_path(&self) -> Option<PathBuf> {
        Self::BONUS_FILES
            .iter()
            .map(|name| self.data_dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load the bonus configuration (`bonuses.toml`, else `bonuses.ron`).
    pub fn load_bonus_config(&self) -> LoadResult<ArchetypeBonusConfig> {
        let path = self.bonus_config_path().ok_or_else(|| {
            anyhow::anyhow!(
                "No bonus config ({}) in {}",
                Self::BONUS_FILES.join(" or "),
                self.data_dir.display()
            )
        })?;
        BonusConfigLoader::load(&path)
    }

    /// Load and build the bonus catalog.
    pub fn load_catalog(&self) -> LoadResult<BonusCatalog> {
        Ok(BonusCatalog::build(&self.load_bonus_config()?))
    }

    /// Load settings from `settings.toml`; defaults when the file is absent.
    pub fn load_settings(&self) -> LoadResult<BonusSettings> {
        let path = self.data_dir.join(Self::SETTINGS_FILE);
        if !path.is_file() {
            return Ok(BonusSettings::default());
        }
        SettingsLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archetype_core::{Archetype, BonusCategory};

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_data_dir_loads() {
        let factory = ContentFactory::new(crate::bundled_data_dir());
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(
            catalog.magnitude(Archetype::WaterElemental, BonusCategory::FishingLuck),
            Some(20.0)
        );
        assert!(factory.load_settings().unwrap().enabled);
    }

    #[test]
    fn prefers_toml_over_ron() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bonuses.ron"),
            "(bonuses: [(archetype: elf, category: mana_regen, magnitude: 1.0)])",
        )
        .unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.bonus_config_path(), Some(dir.path().join("bonuses.ron")));

        std::fs::write(
            dir.path().join("bonuses.toml"),
            "[[bonuses]]\narchetype = \"elf\"\ncategory = \"mana_regen\"\nmagnitude = 2.0\n",
        )
        .unwrap();
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.magnitude(Archetype::Elf, BonusCategory::ManaRegen), Some(2.0));
    }

    #[test]
    fn empty_dir_has_defaults_but_no_bonuses() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_settings().unwrap().enabled);
        assert!(factory.load_bonus_config().is_err());
    }
}
