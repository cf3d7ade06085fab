//! Content loaders for reading bonus data from files.
//!
//! Each loader turns one TOML/RON file into an archetype-core type. Loaders
//! do not validate magnitudes; catalog checks happen in
//! [`archetype_core::BonusCatalog::audit`].

pub mod bonuses;
pub mod factory;
pub mod settings;

pub use bonuses::{BonusConfigLoader, ConfigFormat};
pub use factory::ContentFactory;
pub use settings::SettingsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
