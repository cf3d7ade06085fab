//! Archetype detection from raw appearance data.
//!
//! Detection runs once per character-load event and never fails:
//!
//! ```text
//! race code ──known──→ BaseRace ──┐
//!     │                           ├──→ variant token refinement ──→ Archetype
//!     └─unknown→ race name match ─┘
//!                    └─no match→ Human + DetectionWarning
//! ```
//!
//! Variant detection is keyword matching over an appearance token the host
//! does not structure for us; see [`variant`] for the keyword priority.

mod variant;

use crate::archetype::{Archetype, BaseRace, CharacterAppearance};
use crate::error::DetectionWarning;

/// Outcome of inspecting an appearance descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub archetype: Archetype,
    /// Base race the archetype was reached from; `None` when defaulted.
    pub base: Option<BaseRace>,
    pub warning: Option<DetectionWarning>,
}

/// Race-name fallback table, evaluated in order; first match wins.
///
/// Each entry lists substrings that must all be present.
const RACE_NAME_RULES: &[(&[&str], Archetype)] = &[
    (&["human"], Archetype::Human),
    (&["elf"], Archetype::Elf),
    (&["angel"], Archetype::Angel),
    (&["demon"], Archetype::Demon),
    (&["fire", "element"], Archetype::FireElemental),
    (&["water", "element"], Archetype::WaterElemental),
    (&["element"], Archetype::Elemental),
    (&["amari"], Archetype::Amari),
    (&["naga"], Archetype::Naga),
];

/// Pure archetype detector.
pub struct ArchetypeDetector;

impl ArchetypeDetector {
    /// Resolves an archetype from a race code and optional appearance token.
    ///
    /// Unknown race codes resolve to [`Archetype::Human`]. Use
    /// [`ArchetypeDetector::inspect`] to get the race-name fallback and the
    /// warning that explains a default.
    pub fn detect(race_code: i32, appearance_token: Option<&str>) -> Archetype {
        match BaseRace::from_code(race_code) {
            Some(race) => Self::refine(race.generic_archetype(), appearance_token),
            None => Archetype::Human,
        }
    }

    /// Full detection over a host descriptor, including diagnostics.
    pub fn inspect(appearance: &CharacterAppearance) -> Detection {
        let token = appearance.appearance_token.as_deref();

        if let Some(race) = BaseRace::from_code(appearance.race_code) {
            return Detection {
                archetype: Self::refine(race.generic_archetype(), token),
                base: Some(race),
                warning: None,
            };
        }

        let code = appearance.race_code;
        match appearance.race_name.as_deref() {
            Some(name) => match Self::match_race_name(name) {
                Some(archetype) => {
                    let archetype = Self::refine(archetype, token);
                    Detection {
                        archetype,
                        base: Some(archetype.base_race()),
                        warning: None,
                    }
                }
                None => Detection {
                    archetype: Archetype::Human,
                    base: None,
                    warning: Some(DetectionWarning::UnrecognizedRaceName {
                        code,
                        name: name.to_owned(),
                    }),
                },
            },
            None => Detection {
                archetype: Archetype::Human,
                base: None,
                warning: Some(DetectionWarning::UnknownRaceCode { code }),
            },
        }
    }

    /// Case-insensitive substring match of a free-text race name.
    pub fn match_race_name(name: &str) -> Option<Archetype> {
        let name = name.to_ascii_lowercase();
        RACE_NAME_RULES
            .iter()
            .find(|(needles, _)| needles.iter().all(|n| name.contains(*n)))
            .map(|(_, archetype)| *archetype)
    }

    /// Refines a generic archetype with the appearance token.
    ///
    /// Variants and races without variants pass through unchanged.
    fn refine(archetype: Archetype, token: Option<&str>) -> Archetype {
        if archetype.is_variant() {
            return archetype;
        }
        let Some(token) = token else {
            return archetype;
        };
        let token = token.to_ascii_lowercase();
        variant::match_variant(archetype.base_race(), &token).unwrap_or(archetype)
    }
}
