//! Bonus resolver: the active archetype and the queries answered against it.
//!
//! The resolver owns exactly one [`ResolverState`]. It is replaced wholesale
//! on every detection and reset on a character switch; it is never patched in
//! place. Every query first checks [`BonusSettings::enabled`] and returns its
//! input unchanged when bonuses are off.

use std::sync::Arc;

use super::dispatch::StatId;
use crate::archetype::{Archetype, CharacterId};
use crate::bonus::{BonusCatalog, BonusCategory, BonusEntry, CompositionMode};
use crate::config::BonusSettings;

/// Detection state of the running session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolverState {
    #[default]
    Undetected,
    Detected {
        archetype: Archetype,
        owner: CharacterId,
    },
}

impl ResolverState {
    pub const fn archetype(&self) -> Option<Archetype> {
        match self {
            Self::Undetected => None,
            Self::Detected { archetype, .. } => Some(*archetype),
        }
    }

    pub const fn owner(&self) -> Option<CharacterId> {
        match self {
            Self::Undetected => None,
            Self::Detected { owner, .. } => Some(*owner),
        }
    }
}

/// Host-side grants that can be amplified by a bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GainKind {
    Experience,
    Currency,
}

impl GainKind {
    pub const fn category(self) -> BonusCategory {
        match self {
            Self::Experience => BonusCategory::ExperienceGain,
            Self::Currency => BonusCategory::GoldFind,
        }
    }
}

/// Answers bonus queries for the active archetype.
#[derive(Clone, Debug)]
pub struct BonusResolver {
    catalog: Arc<BonusCatalog>,
    settings: BonusSettings,
    state: ResolverState,
}

impl BonusResolver {
    pub fn new(catalog: Arc<BonusCatalog>, settings: BonusSettings) -> Self {
        Self {
            catalog,
            settings,
            state: ResolverState::Undetected,
        }
    }

    pub fn settings(&self) -> &BonusSettings {
        &self.settings
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    /// Swaps catalog and settings wholesale. The detected archetype is kept.
    pub fn replace_catalog(&mut self, catalog: Arc<BonusCatalog>, settings: BonusSettings) {
        self.catalog = catalog;
        self.settings = settings;
    }

    /// Activates `archetype` without a character context.
    pub fn set_archetype(&mut self, archetype: Archetype) {
        self.assign(CharacterId::ANONYMOUS, archetype);
    }

    /// Replaces the state with `archetype` owned by `owner`.
    ///
    /// Returns `false` when the same owner already had the same archetype.
    pub fn assign(&mut self, owner: CharacterId, archetype: Archetype) -> bool {
        let next = ResolverState::Detected { archetype, owner };
        let changed = self.state != next;
        self.state = next;
        changed
    }

    /// Forgets the active archetype.
    pub fn reset(&mut self) {
        self.state = ResolverState::Undetected;
    }

    pub fn get_archetype(&self) -> Option<Archetype> {
        self.state.archetype()
    }

    /// Entries of the active archetype; empty when undetected.
    pub fn active_bonuses(&self) -> &[BonusEntry] {
        match self.state.archetype() {
            Some(archetype) => self.catalog.lookup(archetype),
            None => &[],
        }
    }

    /// True iff the active archetype carries `category` with a nonzero magnitude.
    pub fn has_bonus(&self, category: BonusCategory) -> bool {
        self.get_magnitude(category) != 0.0
    }

    /// Stored magnitude of `category`; `0.0` when undetected, absent or disabled.
    pub fn get_magnitude(&self, category: BonusCategory) -> f64 {
        if !self.settings.enabled {
            return 0.0;
        }
        self.magnitude_unchecked(category)
    }

    /// Applies `category` to `base` with the category's default composition.
    pub fn apply(&self, base: f64, category: BonusCategory) -> f64 {
        self.apply_with(base, category, category.composition())
    }

    /// Applies `category` to `base` with an explicit composition.
    pub fn apply_with(&self, base: f64, category: BonusCategory, mode: CompositionMode) -> f64 {
        if !self.settings.enabled {
            return base;
        }
        self.apply_unchecked(base, category, mode)
    }

    /// Resolves a stat through its routes, in order.
    pub fn resolve(&self, stat: StatId, raw: f64) -> f64 {
        if !self.settings.enabled {
            return raw;
        }
        self.resolve_unchecked(stat, raw)
    }

    /// Resolves a host stat key; unknown keys pass `raw` through.
    pub fn resolve_key(&self, key: &str, raw: f64) -> f64 {
        if !self.settings.enabled {
            return raw;
        }
        match StatId::parse(key) {
            Some(stat) => self.resolve_unchecked(stat, raw),
            None => raw,
        }
    }

    /// Amplifies a positive grant by `category`; losses and zero pass through.
    ///
    /// The multiplier is the Offset rule applied to `1.0`, so a +20 bonus
    /// turns a grant of 100 into 120.
    pub fn apply_positive_gain(&self, category: BonusCategory, amount: f64) -> f64 {
        if !self.settings.enabled || amount <= 0.0 {
            return amount;
        }
        amount * self.apply_unchecked(1.0, category, CompositionMode::Offset)
    }

    pub fn apply_gain(&self, kind: GainKind, amount: f64) -> f64 {
        self.apply_positive_gain(kind.category(), amount)
    }

    // ===== unchecked: callers have tested `settings.enabled` =====

    fn magnitude_unchecked(&self, category: BonusCategory) -> f64 {
        self.active_bonuses()
            .iter()
            .find(|e| e.category == category)
            .map_or(0.0, |e| e.magnitude)
    }

    fn apply_unchecked(&self, base: f64, category: BonusCategory, mode: CompositionMode) -> f64 {
        let magnitude = self.magnitude_unchecked(category);
        if magnitude == 0.0 {
            return base;
        }
        mode.compose(base, magnitude)
    }

    fn resolve_unchecked(&self, stat: StatId, raw: f64) -> f64 {
        stat.routes()
            .iter()
            .fold(raw, |value, route| self.apply_unchecked(value, route.category, route.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::{ArchetypeBonusConfig, reference_config};
    use strum::IntoEnumIterator;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn resolver_with(config: ArchetypeBonusConfig) -> BonusResolver {
        BonusResolver::new(
            Arc::new(BonusCatalog::build(&config)),
            BonusSettings::default(),
        )
    }

    fn reference_resolver() -> BonusResolver {
        resolver_with(reference_config())
    }

    #[test]
    fn undetected_resolver_is_identity() {
        let resolver = reference_resolver();
        assert_eq!(resolver.get_archetype(), None);
        assert!(!resolver.has_bonus(BonusCategory::MeleeStrength));
        assert_eq!(resolver.get_magnitude(BonusCategory::MeleeStrength), 0.0);
        assert_eq!(resolver.resolve(StatId::AttackDamage, 42.0), 42.0);
        assert_eq!(resolver.resolve_key("Crit", 0.05), 0.05);
        assert!(resolver.active_bonuses().is_empty());
    }

    #[test]
    fn zero_magnitude_is_identity_for_every_category() {
        let config = BonusCategory::iter().fold(ArchetypeBonusConfig::new(), |c, cat| {
            c.with(Archetype::Human, cat, 0.0)
        });
        let mut resolver = resolver_with(config);
        resolver.set_archetype(Archetype::Human);

        for category in BonusCategory::iter() {
            for x in [-3.5, 0.0, 0.05, 1.0, 250.0] {
                assert_eq!(resolver.apply(x, category), x);
            }
            assert!(!resolver.has_bonus(category));
        }
    }

    #[test]
    fn scale_and_offset_follow_category() {
        let config = ArchetypeBonusConfig::new()
            .with(Archetype::Demon, BonusCategory::MeleeStrength, 20.0)
            .with(Archetype::Demon, BonusCategory::CriticalChance, 15.0);
        let mut resolver = resolver_with(config);
        resolver.set_archetype(Archetype::Demon);

        assert!(close(resolver.apply(10.0, BonusCategory::MeleeStrength), 12.0));
        assert!(close(resolver.apply(0.05, BonusCategory::CriticalChance), 0.20));
    }

    #[test]
    fn negative_magnitudes_are_applied_as_configured() {
        let config = ArchetypeBonusConfig::new().with(Archetype::Naga, BonusCategory::MovementSpeed, -10.0);
        let mut resolver = resolver_with(config);
        resolver.set_archetype(Archetype::Naga);

        assert!(resolver.has_bonus(BonusCategory::MovementSpeed));
        assert!(close(resolver.resolve(StatId::MovementSpeed, 5.0), 4.5));
    }

    #[test]
    fn attack_damage_composes_both_categories_in_series() {
        let mut resolver = reference_resolver();
        resolver.set_archetype(Archetype::FireElemental);
        // 10 × 1.15 × 1.20
        assert!(close(resolver.resolve(StatId::AttackDamage, 10.0), 13.8));
        assert!(close(resolver.resolve(StatId::MeleeDamage, 10.0), 11.5));
        assert!(close(resolver.resolve(StatId::MagicDamage, 10.0), 12.0));
    }

    #[test]
    fn forage_routes_differ_by_identifier() {
        let mut resolver = reference_resolver();
        resolver.set_archetype(Archetype::Elf);
        // ForagingChance = 15
        assert!(close(resolver.resolve(StatId::ForagingSkill, 10.0), 11.5));
        assert!(close(resolver.resolve(StatId::ForageChance, 0.10), 0.25));
    }

    #[test]
    fn unknown_stat_passes_through() {
        let mut resolver = reference_resolver();
        resolver.set_archetype(Archetype::Demon);
        assert_eq!(resolver.resolve_key("Stamina", 42.0), 42.0);
        // Known stat without a bonus for this archetype
        assert_eq!(resolver.resolve(StatId::FishingLuck, 3.0), 3.0);
    }

    #[test]
    fn switching_does_not_leak_previous_archetype() {
        let mut resolver = reference_resolver();
        resolver.set_archetype(Archetype::Demon);
        assert!(resolver.has_bonus(BonusCategory::MeleeStrength));

        resolver.reset();
        assert_eq!(resolver.state(), ResolverState::Undetected);

        resolver.set_archetype(Archetype::Elf);
        assert!(!resolver.has_bonus(BonusCategory::MeleeStrength));
        assert!(resolver.has_bonus(BonusCategory::FarmingSpeed));
    }

    #[test]
    fn assign_reports_unchanged_state() {
        let mut resolver = reference_resolver();
        assert!(resolver.assign(CharacterId(5), Archetype::Angel));
        assert!(!resolver.assign(CharacterId(5), Archetype::Angel));
        assert!(resolver.assign(CharacterId(6), Archetype::Angel));
        assert_eq!(resolver.state().owner(), Some(CharacterId(6)));
    }

    #[test]
    fn positive_gain_never_amplifies_losses() {
        let config = ArchetypeBonusConfig::new().with(Archetype::Human, BonusCategory::GoldFind, 20.0);
        let mut resolver = resolver_with(config);
        resolver.set_archetype(Archetype::Human);

        assert_eq!(resolver.apply_positive_gain(BonusCategory::GoldFind, -50.0), -50.0);
        assert_eq!(resolver.apply_positive_gain(BonusCategory::GoldFind, 0.0), 0.0);
        assert!(close(resolver.apply_positive_gain(BonusCategory::GoldFind, 100.0), 120.0));
        assert!(close(resolver.apply_gain(GainKind::Currency, 100.0), 120.0));
        // No experience bonus configured
        assert_eq!(resolver.apply_gain(GainKind::Experience, 100.0), 100.0);
    }

    #[test]
    fn disabled_settings_short_circuit_everything() {
        let mut resolver = BonusResolver::new(
            Arc::new(BonusCatalog::build(&reference_config())),
            BonusSettings::disabled(),
        );
        resolver.set_archetype(Archetype::Demon);

        assert_eq!(resolver.get_archetype(), Some(Archetype::Demon));
        assert!(!resolver.has_bonus(BonusCategory::MeleeStrength));
        assert_eq!(resolver.apply(10.0, BonusCategory::MeleeStrength), 10.0);
        assert_eq!(resolver.resolve(StatId::AttackDamage, 10.0), 10.0);
        assert_eq!(resolver.apply_gain(GainKind::Currency, 100.0), 100.0);
    }

    #[test]
    fn toggling_settings_gates_each_entry_point() {
        let mut resolver = reference_resolver();
        resolver.set_archetype(Archetype::Demon);
        let catalog = Arc::new(BonusCatalog::build(&reference_config()));

        // Demon: MeleeStrength 20, MagicPower 15
        assert!(close(resolver.resolve_key("AttackDamage", 10.0), 13.8));
        assert!(close(resolver.resolve(StatId::AttackDamage, 10.0), 13.8));
        assert!(close(
            resolver.apply_with(10.0, BonusCategory::MagicPower, CompositionMode::Offset),
            10.15
        ));

        resolver.replace_catalog(Arc::clone(&catalog), BonusSettings::disabled());
        assert_eq!(resolver.resolve_key("AttackDamage", 10.0), 10.0);
        assert_eq!(resolver.resolve(StatId::AttackDamage, 10.0), 10.0);
        assert_eq!(
            resolver.apply_with(10.0, BonusCategory::MagicPower, CompositionMode::Offset),
            10.0
        );
        assert_eq!(resolver.apply_positive_gain(BonusCategory::MeleeStrength, 100.0), 100.0);

        resolver.replace_catalog(catalog, BonusSettings::default());
        assert!(close(resolver.resolve_key("AttackDamage", 10.0), 13.8));
        assert_eq!(resolver.get_magnitude(BonusCategory::MeleeStrength), 20.0);
    }

    #[test]
    fn replacing_catalog_keeps_archetype() {
        let mut resolver = reference_resolver();
        resolver.set_archetype(Archetype::Demon);

        let updated = ArchetypeBonusConfig::new().with(Archetype::Demon, BonusCategory::MeleeStrength, 50.0);
        resolver.replace_catalog(Arc::new(BonusCatalog::build(&updated)), BonusSettings::default());

        assert_eq!(resolver.get_archetype(), Some(Archetype::Demon));
        assert_eq!(resolver.get_magnitude(BonusCategory::MeleeStrength), 50.0);
        assert_eq!(resolver.get_magnitude(BonusCategory::CriticalChance), 0.0);
    }
}
