//! Bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap a bonus engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Data directory with `bonuses.toml`/`bonuses.ron` and `settings.toml`.
    pub data_dir: Option<PathBuf>,
    /// Explicit bonus file; wins over `data_dir`.
    pub bonus_config: Option<PathBuf>,
    /// Overrides `enabled` from whatever settings were loaded.
    pub enabled_override: Option<bool>,
    /// Directory for the optional file log.
    pub log_dir: Option<PathBuf>,
}

impl BootstrapConfig {
    pub const DATA_DIR_VAR: &'static str = "ARCHETYPE_DATA_DIR";
    pub const BONUS_CONFIG_VAR: &'static str = "ARCHETYPE_BONUS_CONFIG";
    pub const ENABLED_VAR: &'static str = "ARCHETYPE_BONUSES_ENABLED";
    pub const LOG_DIR_VAR: &'static str = "ARCHETYPE_LOG_DIR";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARCHETYPE_DATA_DIR` - Data directory (default: none)
    /// - `ARCHETYPE_BONUS_CONFIG` - Explicit bonus file (default: none)
    /// - `ARCHETYPE_BONUSES_ENABLED` - `true`/`false` override (default: from settings)
    /// - `ARCHETYPE_LOG_DIR` - Write `archetype.log` there (default: stderr only)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            data_dir: path(Self::DATA_DIR_VAR),
            bonus_config: path(Self::BONUS_CONFIG_VAR),
            enabled_override: read_var::<bool>(&lookup, Self::ENABLED_VAR),
            log_dir: path(Self::LOG_DIR_VAR),
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().to_ascii_lowercase().parse().ok()
}
