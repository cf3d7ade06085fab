//! Reference bonus configuration shipped with the game.
//!
//! Four bonuses per archetype, themed after each race: fire-aligned kinds get
//! melee, magic, speed and crit; water-aligned kinds get defense, regen and
//! fishing luck. `archetype-content` ships the same table as `bonuses.toml`.

use super::BonusCategory::{self, *};
use super::catalog::{ArchetypeBonusConfig, BonusConfigEntry};
use crate::archetype::Archetype;

#[rustfmt::skip]
const REFERENCE: &[(Archetype, [(BonusCategory, f64); 4])] = &[
    (Archetype::Human,          [(ExperienceGain, 10.0), (RelationshipGain, 10.0), (CraftingSpeed, 10.0), (GoldFind, 5.0)]),
    (Archetype::Elf,            [(FarmingSpeed, 15.0), (CropQuality, 10.0), (ForagingChance, 15.0), (ManaRegen, 10.0)]),
    (Archetype::Angel,          [(HealthRegen, 20.0), (MaxMana, 15.0), (Defense, 10.0), (LuckBonus, 10.0)]),
    (Archetype::Demon,          [(MeleeStrength, 20.0), (MagicPower, 15.0), (CriticalChance, 10.0), (GoldFind, 10.0)]),
    (Archetype::Elemental,      [(MagicPower, 15.0), (MaxMana, 10.0), (ManaRegen, 10.0), (MiningSpeed, 10.0)]),
    (Archetype::FireElemental,  [(MeleeStrength, 15.0), (MagicPower, 20.0), (AttackSpeed, 10.0), (CriticalChance, 10.0)]),
    (Archetype::WaterElemental, [(Defense, 15.0), (HealthRegen, 15.0), (ManaRegen, 15.0), (FishingLuck, 20.0)]),
    (Archetype::Amari,          [(MovementSpeed, 10.0), (DodgeChance, 5.0), (ForagingChance, 10.0), (WoodcuttingSpeed, 10.0)]),
    (Archetype::AmariCat,       [(DodgeChance, 10.0), (CriticalChance, 10.0), (MovementSpeed, 10.0), (FishingSpeed, 10.0)]),
    (Archetype::AmariDog,       [(MeleeStrength, 10.0), (MaxHealth, 15.0), (ForagingChance, 15.0), (RelationshipGain, 10.0)]),
    (Archetype::AmariBird,      [(MovementSpeed, 15.0), (AttackSpeed, 10.0), (DodgeChance, 10.0), (ForagingChance, 10.0)]),
    (Archetype::AmariAquatic,   [(FishingSpeed, 20.0), (FishingLuck, 15.0), (WateringEfficiency, 20.0), (HealthRegen, 10.0)]),
    (Archetype::AmariReptile,   [(Defense, 15.0), (MaxHealth, 10.0), (MiningSpeed, 15.0), (MiningYield, 10.0)]),
    (Archetype::Naga,           [(FishingSpeed, 15.0), (MaxMana, 10.0), (Defense, 10.0), (ManaRegen, 10.0)]),
];

/// The reference configuration, with generated labels.
pub fn reference_config() -> ArchetypeBonusConfig {
    let bonuses = REFERENCE
        .iter()
        .flat_map(|(archetype, entries)| {
            entries
                .iter()
                .map(move |&(category, magnitude)| BonusConfigEntry {
                    archetype: *archetype,
                    category,
                    magnitude,
                    label: None,
                })
        })
        .collect();
    ArchetypeBonusConfig { bonuses }
}
