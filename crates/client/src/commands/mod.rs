//! Subcommands of the host harness.
//!
//! Each command runs one character-load event against the engine and writes
//! its result to the given writer.

mod bonuses;
mod detect;
mod grant;
mod resolve;

pub use bonuses::Bonuses;
pub use detect::Detect;
pub use grant::Grant;
pub use resolve::Resolve;

use archetype_core::{CharacterAppearance, CharacterId};
use clap::Args;

/// Appearance data of the character the command runs for.
#[derive(Args, Debug, Clone)]
pub struct CharacterArgs {
    /// Host race code (0 = Human .. 6 = Demon)
    #[arg(long, allow_hyphen_values = true)]
    pub race_code: i32,

    /// Free-text race name used when the code is unknown
    #[arg(long)]
    pub race_name: Option<String>,

    /// Appearance token, e.g. `body_elemental_fire`
    #[arg(long)]
    pub token: Option<String>,

    /// Host character id
    #[arg(long, default_value_t = 1)]
    pub character: u64,
}

impl CharacterArgs {
    pub fn appearance(&self) -> CharacterAppearance {
        CharacterAppearance {
            race_name: self.race_name.clone(),
            appearance_token: self.token.clone(),
            ..CharacterAppearance::new(CharacterId(self.character), self.race_code)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::CharacterArgs;

    pub fn character(race_code: i32, token: Option<&str>) -> CharacterArgs {
        CharacterArgs {
            race_code,
            race_name: None,
            token: token.map(str::to_owned),
            character: 1,
        }
    }

    pub fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }
}
