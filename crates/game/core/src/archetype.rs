//! Character archetypes and the appearance descriptor they are detected from.
//!
//! An [`Archetype`] is the closed classification that keys the bonus catalog.
//! Base races come from the host's race code; variants (fire/water elementals,
//! the Amari families) are refined from an appearance token.

/// Base race as encoded by the host's save data.
///
/// The discriminants are the host's race codes.
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
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum BaseRace {
    Human = 0,
    Elf = 1,
    Amari = 2,
    Naga = 3,
    Elemental = 4,
    Angel = 5,
    Demon = 6,
}

impl BaseRace {
    /// Maps a host race code to a base race. Out-of-range codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    /// The archetype used when no variant can be determined.
    pub const fn generic_archetype(self) -> Archetype {
        match self {
            Self::Human => Archetype::Human,
            Self::Elf => Archetype::Elf,
            Self::Amari => Archetype::Amari,
            Self::Naga => Archetype::Naga,
            Self::Elemental => Archetype::Elemental,
            Self::Angel => Archetype::Angel,
            Self::Demon => Archetype::Demon,
        }
    }
}

/// Closed set of character kinds that carry a bonus list.
///
/// Generic `Elemental` and `Amari` are fallbacks for characters whose variant
/// could not be read from their appearance.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[repr(u8)]
pub enum Archetype {
    #[default]
    Human,
    Elf,
    Angel,
    Demon,
    Elemental,
    FireElemental,
    WaterElemental,
    Amari,
    AmariCat,
    AmariDog,
    AmariBird,
    AmariAquatic,
    AmariReptile,
    Naga,
}

impl Archetype {
    /// Dense index used by per-archetype tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The base race this archetype specializes.
    pub const fn base_race(self) -> BaseRace {
        match self {
            Self::Human => BaseRace::Human,
            Self::Elf => BaseRace::Elf,
            Self::Angel => BaseRace::Angel,
            Self::Demon => BaseRace::Demon,
            Self::Elemental | Self::FireElemental | Self::WaterElemental => BaseRace::Elemental,
            Self::Amari
            | Self::AmariCat
            | Self::AmariDog
            | Self::AmariBird
            | Self::AmariAquatic
            | Self::AmariReptile => BaseRace::Amari,
            Self::Naga => BaseRace::Naga,
        }
    }

    /// True for archetypes refined from an appearance token.
    pub const fn is_variant(self) -> bool {
        !matches!(
            self,
            Self::Human
                | Self::Elf
                | Self::Angel
                | Self::Demon
                | Self::Elemental
                | Self::Amari
                | Self::Naga
        )
    }

    /// Human-readable name, e.g. `"Fire Elemental"`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
            Self::Angel => "Angel",
            Self::Demon => "Demon",
            Self::Elemental => "Elemental",
            Self::FireElemental => "Fire Elemental",
            Self::WaterElemental => "Water Elemental",
            Self::Amari => "Amari",
            Self::AmariCat => "Amari (Cat)",
            Self::AmariDog => "Amari (Dog)",
            Self::AmariBird => "Amari (Bird)",
            Self::AmariAquatic => "Amari (Aquatic)",
            Self::AmariReptile => "Amari (Reptile)",
            Self::Naga => "Naga",
        }
    }
}

/// Host-side identity of a playable character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u64);

impl CharacterId {
    /// Owner recorded when an archetype is set without a character context.
    pub const ANONYMOUS: Self = Self(0);
}

impl core::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "character#{}", self.0)
    }
}

/// Appearance data handed over by the host on every character load.
///
/// This is the only input detection reads. `race_name` is an optional
/// free-text fallback for race codes this version does not know.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterAppearance {
    pub version: u16,
    pub character: CharacterId,
    pub race_code: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub race_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub appearance_token: Option<String>,
}

impl CharacterAppearance {
    /// Descriptor layout version understood by this crate.
    pub const VERSION: u16 = 1;

    pub fn new(character: CharacterId, race_code: i32) -> Self {
        Self {
            version: Self::VERSION,
            character,
            race_code,
            race_name: None,
            appearance_token: None,
        }
    }

    pub fn with_race_name(mut self, name: impl Into<String>) -> Self {
        self.race_name = Some(name.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.appearance_token = Some(token.into());
        self
    }
}
