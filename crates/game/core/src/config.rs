/// Runtime switches for the bonus system.
///
/// Read once at startup (or on reload) by the configuration layer and handed
/// to the resolver by value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BonusSettings {
    /// Master switch. When off every query returns its input unchanged.
    pub enabled: bool,
}

impl BonusSettings {
    pub const DEFAULT_ENABLED: bool = true;

    pub fn new() -> Self {
        Self {
            enabled: Self::DEFAULT_ENABLED,
        }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for BonusSettings {
    fn default() -> Self {
        Self::new()
    }
}
