//! Bonus configuration loader.

use std::path::Path;

use archetype_core::ArchetypeBonusConfig;

use crate::loaders::{LoadResult, read_file};

/// On-disk format of a bonus configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    /// Picks the format from the file extension (`.toml` or `.ron`).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            _ => Err(anyhow::anyhow!(
                "Unsupported bonus config format: {} (expected .toml or .ron)",
                path.display()
            )),
        }
    }
}

/// Loader for archetype bonus configuration.
///
/// # TOML layout
///
/// ```toml
/// [[bonuses]]
/// archetype = "demon"
/// category = "melee_strength"
/// magnitude = 20.0
/// label = "Infernal Might"   # optional
/// ```
pub struct BonusConfigLoader;

impl BonusConfigLoader {
    /// Load bonus configuration, picking the parser from the extension.
    pub fn load(path: &Path) -> LoadResult<ArchetypeBonusConfig> {
        let format = ConfigFormat::from_path(path)?;
        let content = read_file(path)?;
        Self::parse(&content, format)
    }

    /// Parse bonus configuration from an in-memory string.
    pub fn parse(content: &str, format: ConfigFormat) -> LoadResult<ArchetypeBonusConfig> {
        match format {
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse bonus config TOML: {}", e)),
            ConfigFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse bonus config RON: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archetype_core::{Archetype, BonusCatalog, BonusCategory, reference_config};
    use std::io::Write;

    #[test]
    fn bundled_toml_matches_reference_config() {
        let content = include_str!("../../data/bonuses.toml");
        let config = BonusConfigLoader::parse(content, ConfigFormat::Toml)
            .expect("bundled bonuses.toml should parse");
        assert_eq!(config, reference_config());
        assert!(BonusCatalog::build(&config).audit().is_empty());
    }

    #[test]
    fn loads_toml_with_optional_labels() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[[bonuses]]
archetype = "demon"
category = "melee_strength"
magnitude = 20.0
label = "Infernal Might"

[[bonuses]]
archetype = "amari_cat"
category = "dodge_chance"
magnitude = 10.0
"#
        )
        .unwrap();

        let config = BonusConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.bonuses[0].label.as_deref(), Some("Infernal Might"));
        assert_eq!(config.bonuses[1].archetype, Archetype::AmariCat);
        assert_eq!(config.bonuses[1].label, None);

        let catalog = BonusCatalog::build(&config);
        assert_eq!(catalog.lookup(Archetype::AmariCat)[0].label, "+10% Dodge Chance");
    }

    #[test]
    fn loads_ron() {
        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        writeln!(
            file,
            "(bonuses: [(archetype: naga, category: fishing_speed, magnitude: 15.0)])"
        )
        .unwrap();

        let config = BonusConfigLoader::load(file.path()).unwrap();
        assert_eq!(
            config,
            ArchetypeBonusConfig::new().with(Archetype::Naga, BonusCategory::FishingSpeed, 15.0)
        );
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let err = BonusConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported bonus config format"));
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let err = BonusConfigLoader::parse(
            "[[bonuses]]\narchetype = \"elf\"\ncategory = \"stamina\"\nmagnitude = 5.0\n",
            ConfigFormat::Toml,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse bonus config TOML"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = BonusConfigLoader::load(Path::new("/nonexistent/bonuses.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bonuses.toml"));
    }
}
