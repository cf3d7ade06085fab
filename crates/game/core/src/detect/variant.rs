//! Keyword tables that refine a base race into a variant archetype.
//!
//! Tables are scanned top to bottom and the first rule with a matching keyword
//! wins, so more specific families must be listed first. A token containing
//! keywords of two families (e.g. "cat" and "bird") resolves to the earlier one.

use crate::archetype::{Archetype, BaseRace};

/// A variant and the keywords that select it.
pub(crate) struct VariantRule {
    pub archetype: Archetype,
    pub keywords: &'static [&'static str],
}

const ELEMENTAL_RULES: &[VariantRule] = &[
    VariantRule {
        archetype: Archetype::FireElemental,
        keywords: &["fire"],
    },
    VariantRule {
        archetype: Archetype::WaterElemental,
        keywords: &["water"],
    },
];

const AMARI_RULES: &[VariantRule] = &[
    VariantRule {
        archetype: Archetype::AmariCat,
        keywords: &["cat"],
    },
    VariantRule {
        archetype: Archetype::AmariDog,
        keywords: &["dog", "wolf", "canine"],
    },
    VariantRule {
        archetype: Archetype::AmariBird,
        keywords: &["bird", "avian", "feather"],
    },
    VariantRule {
        archetype: Archetype::AmariAquatic,
        keywords: &["aquatic", "fish", "amphibian", "frog"],
    },
    VariantRule {
        archetype: Archetype::AmariReptile,
        keywords: &["reptile", "lizard", "dragon", "snake"],
    },
];

/// Variant rules for a base race; empty for races without variants.
pub(crate) fn rules_for(race: BaseRace) -> &'static [VariantRule] {
    match race {
        BaseRace::Elemental => ELEMENTAL_RULES,
        BaseRace::Amari => AMARI_RULES,
        BaseRace::Human | BaseRace::Elf | BaseRace::Naga | BaseRace::Angel | BaseRace::Demon => {
            &[]
        }
    }
}

/// Returns the first variant whose keyword occurs in `token`.
///
/// `token` must already be lowercase.
pub(crate) fn match_variant(race: BaseRace, token: &str) -> Option<Archetype> {
    rules_for(race)
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| token.contains(*kw)))
        .map(|rule| rule.archetype)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_targets_a_variant_of_its_race() {
        for race in [BaseRace::Elemental, BaseRace::Amari] {
            for rule in rules_for(race) {
                assert_eq!(rule.archetype.base_race(), race);
                assert!(rule.archetype.is_variant());
                assert!(!rule.keywords.is_empty());
            }
        }
    }

    #[test]
    fn races_without_variants_never_match() {
        assert_eq!(match_variant(BaseRace::Naga, "body_naga_fire_cat"), None);
        assert_eq!(match_variant(BaseRace::Human, "water"), None);
    }

    #[test]
    fn earlier_rule_wins_on_ambiguous_tokens() {
        assert_eq!(
            match_variant(BaseRace::Amari, "body_amari_catbird"),
            Some(Archetype::AmariCat)
        );
        assert_eq!(
            match_variant(BaseRace::Amari, "feathered_dragon"),
            Some(Archetype::AmariBird)
        );
        assert_eq!(
            match_variant(BaseRace::Elemental, "steam_water_fire"),
            Some(Archetype::FireElemental)
        );
    }
}
