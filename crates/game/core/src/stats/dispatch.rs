//! Stat dispatch table: host stat identifiers → bonus routes.
//!
//! Every stat the host queries through the resolver is one [`StatId`]. Its
//! routes are applied in order against the running value, so a stat routed to
//! two categories composes both (e.g. `AttackDamage` scales by melee strength,
//! then by magic power). The table is an exhaustive `match`: a new variant
//! does not compile until it is routed.

use crate::bonus::{BonusCategory, CompositionMode};

/// One step of a stat's resolution: which category, combined how.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub category: BonusCategory,
    pub mode: CompositionMode,
}

impl Route {
    pub const fn scale(category: BonusCategory) -> Self {
        Self {
            category,
            mode: CompositionMode::Scale,
        }
    }

    pub const fn offset(category: BonusCategory) -> Self {
        Self {
            category,
            mode: CompositionMode::Offset,
        }
    }
}

/// Builds a `&'static [Route]` from `Mode Category` pairs.
///
/// Expands to struct literals so the slice is promoted to a constant.
macro_rules! routes {
    ($($mode:ident $category:ident),+ $(,)?) => {
        &[$(Route {
            category: BonusCategory::$category,
            mode: CompositionMode::$mode,
        }),+]
    };
}

/// Host statistics that archetype bonuses can modify.
///
/// Parsed from the host's string key (see [`StatId::parse`]) or from its
/// integer code, which is the declaration index.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum StatId {
    // Combat
    AttackDamage,
    MeleeDamage,
    MagicDamage,
    Defense,
    Crit,
    AttackSpeed,
    Dodge,

    // Vitals
    MovementSpeed,
    MaxHealth,
    MaxMana,
    ManaRegen,
    HealthRegen,

    // Farming
    FarmingSkill,
    CropQuality,
    CropYield,
    WateringEfficiency,

    // Gathering
    MiningSkill,
    MiningYield,
    WoodcuttingSkill,
    WoodcuttingYield,
    FishingSkill,
    FishingLuck,
    ForagingSkill,
    ForageChance,

    // Crafting
    CraftingSpeed,
    CraftingQuality,

    // Social and economy
    RelationshipGain,
    ShopDiscount,
    GoldFind,
    ExperienceGain,
    Luck,
}

impl StatId {
    /// Parses a host key, ignoring case, `_` and `-`.
    ///
    /// `"AttackDamage"`, `"attack_damage"` and `"ATTACK-DAMAGE"` are the same
    /// stat. Unknown keys return `None`; they are not errors.
    pub fn parse(key: &str) -> Option<Self> {
        if let Ok(id) = key.parse() {
            return Some(id);
        }
        let compact: String = key.chars().filter(|c| !matches!(c, '_' | '-')).collect();
        compact.parse().ok()
    }

    /// Looks a stat up by its integer code.
    pub fn from_code(code: u32) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    /// Routes applied, in order, when this stat is resolved.
    pub const fn routes(self) -> &'static [Route] {
        match self {
            Self::AttackDamage => routes![Scale MeleeStrength, Scale MagicPower],
            Self::MeleeDamage => routes![Scale MeleeStrength],
            Self::MagicDamage => routes![Scale MagicPower],
            Self::Defense => routes![Scale Defense],
            Self::Crit => routes![Offset CriticalChance],
            Self::AttackSpeed => routes![Scale AttackSpeed],
            Self::Dodge => routes![Offset DodgeChance],

            Self::MovementSpeed => routes![Scale MovementSpeed],
            Self::MaxHealth => routes![Scale MaxHealth],
            Self::MaxMana => routes![Scale MaxMana],
            Self::ManaRegen => routes![Scale ManaRegen],
            Self::HealthRegen => routes![Scale HealthRegen],

            Self::FarmingSkill => routes![Scale FarmingSpeed],
            Self::CropQuality => routes![Scale CropQuality],
            Self::CropYield => routes![Offset CropYield],
            Self::WateringEfficiency => routes![Scale WateringEfficiency],

            Self::MiningSkill => routes![Scale MiningSpeed],
            Self::MiningYield => routes![Offset MiningYield],
            Self::WoodcuttingSkill => routes![Scale WoodcuttingSpeed],
            Self::WoodcuttingYield => routes![Offset WoodcuttingYield],
            // Fishing luck is routed only through FishingLuck, never via the skill level.
            Self::FishingSkill => routes![Scale FishingSpeed],
            Self::FishingLuck => routes![Scale FishingLuck],
            Self::ForagingSkill => routes![Scale ForagingChance],
            Self::ForageChance => routes![Offset ForagingChance],

            Self::CraftingSpeed => routes![Scale CraftingSpeed],
            Self::CraftingQuality => routes![Scale CraftingQuality],

            Self::RelationshipGain => routes![Scale RelationshipGain],
            Self::ShopDiscount => routes![Offset ShopDiscount],
            Self::GoldFind => routes![Offset GoldFind],
            Self::ExperienceGain => routes![Offset ExperienceGain],
            Self::Luck => routes![Offset LuckBonus],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn every_category_is_reachable_from_some_stat() {
        for category in BonusCategory::iter() {
            assert!(
                StatId::iter().any(|s| s.routes().iter().any(|r| r.category == category)),
                "{category} has no stat route"
            );
        }
    }

    #[test]
    fn every_stat_has_routes_without_repeats() {
        for stat in StatId::iter() {
            let routes = stat.routes();
            assert!(!routes.is_empty(), "{stat}");
            for (i, a) in routes.iter().enumerate() {
                assert!(routes[i + 1..].iter().all(|b| b.category != a.category));
            }
        }
    }

    #[test]
    fn routes_use_category_default_except_forage_chance() {
        for stat in StatId::iter() {
            for route in stat.routes() {
                if stat == StatId::ForageChance {
                    assert_eq!(route.mode, CompositionMode::Offset);
                    assert_eq!(route.category.composition(), CompositionMode::Scale);
                } else {
                    assert_eq!(route.mode, route.category.composition(), "{stat}");
                }
            }
        }
    }

    #[test]
    fn attack_damage_scales_melee_then_magic() {
        assert_eq!(
            StatId::AttackDamage.routes(),
            &[
                Route::scale(BonusCategory::MeleeStrength),
                Route::scale(BonusCategory::MagicPower)
            ]
        );
    }

    #[test]
    fn host_keys_parse_in_several_spellings() {
        assert_eq!(StatId::parse("AttackDamage"), Some(StatId::AttackDamage));
        assert_eq!(StatId::parse("crit"), Some(StatId::Crit));
        assert_eq!(StatId::parse("fishing_skill"), Some(StatId::FishingSkill));
        assert_eq!(StatId::parse("FORAGE-CHANCE"), Some(StatId::ForageChance));
        assert_eq!(StatId::parse("Stamina"), None);
        assert_eq!(StatId::parse(""), None);
    }

    #[test]
    fn integer_codes_follow_declaration_order() {
        assert_eq!(StatId::from_code(0), Some(StatId::AttackDamage));
        assert_eq!(StatId::from_code(4), Some(StatId::Crit));
        assert_eq!(StatId::from_code(StatId::COUNT as u32), None);
        assert_eq!(StatId::from_code(1_000), None);
    }
}
