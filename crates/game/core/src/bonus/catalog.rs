//! Per-archetype bonus catalog built once from configuration.

use strum::{EnumCount, IntoEnumIterator};

use super::{BonusCategory, BonusEntry, default_label};
use crate::archetype::Archetype;
use crate::error::CatalogIssue;

/// One configured bonus as supplied by the configuration layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusConfigEntry {
    pub archetype: Archetype,
    pub category: BonusCategory,
    pub magnitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

/// Flat list of configured bonuses for all archetypes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeBonusConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<BonusConfigEntry>,
}

impl ArchetypeBonusConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bonus with a generated label (builder pattern).
    pub fn with(mut self, archetype: Archetype, category: BonusCategory, magnitude: f64) -> Self {
        self.bonuses.push(BonusConfigEntry {
            archetype,
            category,
            magnitude,
            label: None,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }
}

/// Immutable archetype → bonus list table.
///
/// Built once per session (and rebuilt wholesale on reload). Lists keep
/// configuration order. A category configured twice for the same archetype
/// keeps its first position and the last magnitude and label.
#[derive(Clone, Debug, PartialEq)]
pub struct BonusCatalog {
    entries: [Vec<BonusEntry>; Archetype::COUNT],
}

impl BonusCatalog {
    /// Catalog with no entries for any archetype.
    pub fn empty() -> Self {
        Self {
            entries: core::array::from_fn(|_| Vec::new()),
        }
    }

    /// Builds the catalog from configuration. Never fails.
    pub fn build(config: &ArchetypeBonusConfig) -> Self {
        let mut catalog = Self::empty();
        for entry in &config.bonuses {
            let label = entry
                .label
                .clone()
                .unwrap_or_else(|| default_label(entry.category, entry.magnitude));
            catalog.insert(
                entry.archetype,
                BonusEntry::new(entry.category, entry.magnitude, label),
            );
        }
        catalog
    }

    fn insert(&mut self, archetype: Archetype, entry: BonusEntry) {
        let list = &mut self.entries[archetype.index()];
        match list.iter_mut().find(|e| e.category == entry.category) {
            Some(existing) => *existing = entry,
            None => list.push(entry),
        }
    }

    /// Bonus list of an archetype; empty if none were configured.
    pub fn lookup(&self, archetype: Archetype) -> &[BonusEntry] {
        &self.entries[archetype.index()]
    }

    /// Configured magnitude of `category` for `archetype`, if any.
    pub fn magnitude(&self, archetype: Archetype, category: BonusCategory) -> Option<f64> {
        self.lookup(archetype)
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.magnitude)
    }

    /// Total number of entries across all archetypes.
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    /// Reports archetypes left without bonuses.
    ///
    /// Duplicate categories are not reported; they are resolved at build time.
    pub fn audit(&self) -> Vec<CatalogIssue> {
        Archetype::iter()
            .filter(|a| self.lookup(*a).is_empty())
            .map(CatalogIssue::MissingArchetype)
            .collect()
    }
}

impl Default for BonusCatalog {
    fn default() -> Self {
        Self::empty()
    }
}
