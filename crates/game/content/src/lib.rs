//! Data-driven bonus configuration and loaders.
//!
//! This crate reads the files a host ships next to the game:
//! - Bonus configuration (`bonuses.toml` or `bonuses.ron`)
//! - Bonus settings (`settings.toml`)
//!
//! Files deserialize straight into archetype-core types. The reference
//! configuration is bundled under `data/` and kept identical to
//! [`archetype_core::reference_config`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BonusConfigLoader, ConfigFormat, ContentFactory, LoadResult, SettingsLoader};

/// Directory holding the bundled data files of this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
