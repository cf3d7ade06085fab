//! Builds the bonus engine and configuration bundle used by front-ends.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use archetype_core::{BonusCatalog, CatalogIssue};
use archetype_runtime::BonusEngine;
use tracing::info;

use crate::config::BootstrapConfig;
use crate::dirs;
use crate::sources::{BonusSource, ContentSource, FileSource, ReferenceSource};

/// Builder that picks a bonus source and assembles the engine.
///
/// Source precedence, first match wins:
/// 1. an explicit source set through [`EngineBuilder::source`]
/// 2. `bonus_config` (single file)
/// 3. `data_dir`
/// 4. `bonuses.toml` in the platform config directory
/// 5. the built-in reference configuration
pub struct EngineBuilder {
    config: BootstrapConfig,
    source: Option<Arc<dyn BonusSource>>,
    user_config_dir: Option<PathBuf>,
}

impl EngineBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            source: None,
            user_config_dir: dirs::config_dir(),
        }
    }

    /// Provide a custom bonus source.
    pub fn source(mut self, source: impl BonusSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Override the platform config directory probed for `bonuses.toml`.
    pub fn user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    fn select_source(&self) -> Arc<dyn BonusSource> {
        if let Some(source) = &self.source {
            return Arc::clone(source);
        }
        if let Some(path) = &self.config.bonus_config {
            return Arc::new(FileSource::new(path));
        }
        if let Some(dir) = &self.config.data_dir {
            return Arc::new(ContentSource::new(dir));
        }
        let user_file = self
            .user_config_dir
            .as_ref()
            .map(|dir| dir.join("bonuses.toml"))
            .filter(|path| path.is_file());
        match user_file {
            Some(path) => Arc::new(FileSource::new(path)) as Arc<dyn BonusSource>,
            None => Arc::new(ReferenceSource),
        }
    }

    pub fn build(self) -> Result<EngineSetup> {
        let source = self.select_source();
        let loaded = source.load()?;

        let mut settings = loaded.settings;
        if let Some(enabled) = self.config.enabled_override {
            settings.enabled = enabled;
        }

        let catalog = BonusCatalog::build(&loaded.config);
        info!(source = %source, entries = catalog.len(), "bonus configuration loaded");

        let (engine, issues) = BonusEngine::with_issues(catalog, settings);
        let engine = Arc::new(engine);

        Ok(EngineSetup {
            config: self.config,
            source: source.to_string(),
            engine,
            issues,
        })
    }
}

pub struct EngineSetup {
    pub config: BootstrapConfig,
    /// Human-readable description of where the bonuses came from.
    pub source: String,
    pub engine: Arc<BonusEngine>,
    pub issues: Vec<CatalogIssue>,
}
