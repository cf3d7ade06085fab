//! Archetype detection and per-archetype stat bonuses.
//!
//! `archetype-core` is pure: it classifies a character's race into an
//! [`Archetype`], builds an immutable [`BonusCatalog`] from configuration, and
//! answers stat queries through [`BonusResolver`]. Loading files, logging and
//! sharing state across threads live in `archetype-content` and
//! `archetype-runtime`.
pub mod archetype;
pub mod bonus;
pub mod config;
pub mod detect;
pub mod error;
pub mod stats;

pub use archetype::{Archetype, BaseRace, CharacterAppearance, CharacterId};
pub use bonus::{
    ArchetypeBonusConfig, BonusCatalog, BonusCategory, BonusConfigEntry, BonusEntry,
    CompositionMode, default_label, reference_config,
};
pub use config::BonusSettings;
pub use detect::{ArchetypeDetector, Detection};
pub use error::{CatalogIssue, CoreError, DetectionWarning, ErrorSeverity};
pub use stats::{BonusResolver, GainKind, ResolverState, Route, StatId};
