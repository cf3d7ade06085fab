//! Where the bonus configuration comes from.
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use archetype_content::{BonusConfigLoader, ContentFactory};
use archetype_core::{ArchetypeBonusConfig, BonusSettings, reference_config};

/// Bonus configuration and settings as read from one source.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedBonuses {
    pub config: ArchetypeBonusConfig,
    pub settings: BonusSettings,
}

pub trait BonusSource: fmt::Display + Send + Sync {
    fn load(&self) -> Result<LoadedBonuses>;
}

/// The built-in reference configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceSource;

impl BonusSource for ReferenceSource {
    fn load(&self) -> Result<LoadedBonuses> {
        Ok(LoadedBonuses {
            config: reference_config(),
            settings: BonusSettings::default(),
        })
    }
}

impl fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "built-in reference configuration")
    }
}

/// A data directory read through [`ContentFactory`].
///
/// ```text
/// data_dir/
/// ├── settings.toml  (optional)
/// └── bonuses.toml   (or bonuses.ron)
/// ```
#[derive(Clone, Debug)]
pub struct ContentSource {
    data_dir: PathBuf,
}

impl ContentSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl BonusSource for ContentSource {
    fn load(&self) -> Result<LoadedBonuses> {
        let factory = ContentFactory::new(&self.data_dir);
        Ok(LoadedBonuses {
            config: factory
                .load_bonus_config()
                .context("Failed to load bonus configuration")?,
            settings: factory
                .load_settings()
                .context("Failed to load bonus settings")?,
        })
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data directory {}", self.data_dir.display())
    }
}

/// A single bonus file; settings take their defaults.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BonusSource for FileSource {
    fn load(&self) -> Result<LoadedBonuses> {
        Ok(LoadedBonuses {
            config: BonusConfigLoader::load(&self.path)?,
            settings: BonusSettings::default(),
        })
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bonus file {}", self.path.display())
    }
}
