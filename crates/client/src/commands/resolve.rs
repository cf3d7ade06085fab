use std::io::Write;

use anyhow::Result;
use archetype_runtime::BonusEngine;
use clap::Parser;

use super::CharacterArgs;

/// Resolve one stat value through the bonus table
#[derive(Parser, Debug)]
pub struct Resolve {
    #[command(flatten)]
    pub character: CharacterArgs,

    /// Host stat key, e.g. `AttackDamage` or `forage_chance`
    #[arg(long)]
    pub stat: String,

    /// Raw stat value before bonuses
    #[arg(long, allow_hyphen_values = true)]
    pub value: f64,
}

impl Resolve {
    pub fn execute(self, engine: &BonusEngine, out: &mut impl Write) -> Result<()> {
        engine.on_character_loaded(&self.character.appearance());

        match engine.try_resolve(&self.stat, self.value) {
            Ok(resolved) => writeln!(out, "{} -> {}", self.value, resolved)?,
            Err(err) => {
                tracing::warn!("{err}");
                writeln!(out, "{} -> {} (unknown stat, unchanged)", self.value, self.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{character, output};

    fn run(race_code: i32, stat: &str, value: f64) -> String {
        let engine = BonusEngine::default();
        let mut buf = Vec::new();
        Resolve {
            character: character(race_code, None),
            stat: stat.to_owned(),
            value,
        }
        .execute(&engine, &mut buf)
        .unwrap();
        output(buf)
    }

    #[test]
    fn scales_known_stat() {
        // Demon: MeleeStrength 20
        assert_eq!(run(6, "melee_damage", 10.0), "10 -> 12\n");
    }

    #[test]
    fn unknown_stat_is_unchanged() {
        assert_eq!(run(6, "Stamina", 42.0), "42 -> 42 (unknown stat, unchanged)\n");
    }
}
