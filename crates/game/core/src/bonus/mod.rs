//! Bonus data model: categories, composition rules, and catalog entries.
//!
//! A bonus is a signed percentage attached to one [`BonusCategory`]. How the
//! percentage combines with a raw stat is fixed per category by
//! [`CompositionMode`]:
//!
//! ```text
//! Scale:  result = base × (1 + magnitude/100)
//! Offset: result = base + magnitude/100
//! ```
//!
//! Scale is used where the stat has a meaningful nonzero baseline; Offset where
//! the raw stat is itself a small probability or rate near zero.

mod catalog;
mod reference;

pub use catalog::{ArchetypeBonusConfig, BonusCatalog, BonusConfigEntry};
pub use reference::reference_config;

/// Arithmetic rule combining a bonus magnitude with a raw stat value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CompositionMode {
    /// Multiplicative: `base × (1 + magnitude/100)`
    Scale,
    /// Additive percentage: `base + magnitude/100`
    Offset,
}

impl CompositionMode {
    /// Applies `magnitude` (a percentage) to `base`.
    pub fn compose(self, base: f64, magnitude: f64) -> f64 {
        match self {
            Self::Scale => base * (1.0 + magnitude / 100.0),
            Self::Offset => base + magnitude / 100.0,
        }
    }
}

/// Kinds of attribute modifier an archetype can carry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BonusCategory {
    // Combat
    MeleeStrength,
    MagicPower,
    Defense,
    CriticalChance,
    AttackSpeed,
    DodgeChance,

    // Gathering and crafting
    FarmingSpeed,
    CropQuality,
    CropYield,
    WateringEfficiency,
    MiningSpeed,
    MiningYield,
    WoodcuttingSpeed,
    WoodcuttingYield,
    FishingSpeed,
    FishingLuck,
    ForagingChance,
    CraftingSpeed,
    CraftingQuality,

    // Social and economy
    RelationshipGain,
    ShopDiscount,
    GoldFind,
    ExperienceGain,

    // Vitals and misc
    MovementSpeed,
    MaxHealth,
    MaxMana,
    ManaRegen,
    HealthRegen,
    LuckBonus,
}

impl BonusCategory {
    /// Default composition rule for this category.
    ///
    /// Stat routes may override it; `ForagingChance` is scaled as a skill
    /// level but offset as an extra-chance roll.
    pub const fn composition(self) -> CompositionMode {
        match self {
            Self::MeleeStrength
            | Self::MagicPower
            | Self::Defense
            | Self::AttackSpeed
            | Self::MovementSpeed
            | Self::FarmingSpeed
            | Self::CropQuality
            | Self::WateringEfficiency
            | Self::MiningSpeed
            | Self::WoodcuttingSpeed
            | Self::FishingSpeed
            | Self::FishingLuck
            | Self::ForagingChance
            | Self::CraftingSpeed
            | Self::CraftingQuality
            | Self::RelationshipGain
            | Self::MaxHealth
            | Self::MaxMana
            | Self::ManaRegen
            | Self::HealthRegen => CompositionMode::Scale,

            Self::CriticalChance
            | Self::DodgeChance
            | Self::CropYield
            | Self::MiningYield
            | Self::WoodcuttingYield
            | Self::ShopDiscount
            | Self::GoldFind
            | Self::ExperienceGain
            | Self::LuckBonus => CompositionMode::Offset,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MeleeStrength => "Melee Strength",
            Self::MagicPower => "Magic Power",
            Self::Defense => "Defense",
            Self::CriticalChance => "Critical Chance",
            Self::AttackSpeed => "Attack Speed",
            Self::DodgeChance => "Dodge Chance",
            Self::FarmingSpeed => "Farming Speed",
            Self::CropQuality => "Crop Quality",
            Self::CropYield => "Crop Yield",
            Self::WateringEfficiency => "Watering Efficiency",
            Self::MiningSpeed => "Mining Speed",
            Self::MiningYield => "Mining Yield",
            Self::WoodcuttingSpeed => "Woodcutting Speed",
            Self::WoodcuttingYield => "Woodcutting Yield",
            Self::FishingSpeed => "Fishing Speed",
            Self::FishingLuck => "Fishing Luck",
            Self::ForagingChance => "Foraging Chance",
            Self::CraftingSpeed => "Crafting Speed",
            Self::CraftingQuality => "Crafting Quality",
            Self::RelationshipGain => "Relationship Gain",
            Self::ShopDiscount => "Shop Discount",
            Self::GoldFind => "Gold Find",
            Self::ExperienceGain => "Experience Gain",
            Self::MovementSpeed => "Movement Speed",
            Self::MaxHealth => "Max Health",
            Self::MaxMana => "Max Mana",
            Self::ManaRegen => "Mana Regen",
            Self::HealthRegen => "Health Regen",
            Self::LuckBonus => "Luck",
        }
    }
}

/// One configured bonus of an archetype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusEntry {
    pub category: BonusCategory,
    /// Signed percentage, e.g. `20.0` for +20%.
    pub magnitude: f64,
    pub label: String,
}

impl BonusEntry {
    pub fn new(category: BonusCategory, magnitude: f64, label: impl Into<String>) -> Self {
        Self {
            category,
            magnitude,
            label: label.into(),
        }
    }
}

/// Formats the label used when configuration supplies none.
pub fn default_label(category: BonusCategory, magnitude: f64) -> String {
    format!("{magnitude:+}% {}", category.display_name())
}
