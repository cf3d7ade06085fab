//! Display snapshot of the active archetype and its bonuses.

use std::fmt;

use archetype_core::{Archetype, BonusEntry, CharacterId};
use serde::Serialize;

/// What a host needs to render a bonus tooltip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BonusSummary {
    pub archetype: Option<Archetype>,
    pub character: Option<CharacterId>,
    pub enabled: bool,
    pub entries: Vec<BonusEntry>,
}

impl BonusSummary {
    pub fn is_active(&self) -> bool {
        self.enabled && self.archetype.is_some()
    }
}

impl fmt::Display for BonusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(archetype) = self.archetype else {
            return write!(f, "no archetype detected");
        };
        write!(f, "{}", archetype.display_name())?;
        if !self.enabled {
            write!(f, " (bonuses disabled)")?;
        }
        for entry in &self.entries {
            write!(f, "\n  {}", entry.label)?;
        }
        Ok(())
    }
}
