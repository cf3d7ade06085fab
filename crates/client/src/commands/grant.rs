use std::io::Write;

use anyhow::Result;
use archetype_core::GainKind;
use archetype_runtime::BonusEngine;
use clap::Parser;

use super::CharacterArgs;

/// Apply an experience or currency grant
#[derive(Parser, Debug)]
pub struct Grant {
    #[command(flatten)]
    pub character: CharacterArgs,

    /// Grant kind: `experience` or `currency`
    #[arg(long)]
    pub kind: GainKind,

    /// Granted amount; losses are never amplified
    #[arg(long, allow_hyphen_values = true)]
    pub amount: f64,
}

impl Grant {
    pub fn execute(self, engine: &BonusEngine, out: &mut impl Write) -> Result<()> {
        engine.on_character_loaded(&self.character.appearance());
        let granted = engine.grant(self.kind, self.amount);
        writeln!(out, "{} {} -> {}", self.kind, self.amount, granted)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{character, output};

    fn run(kind: GainKind, amount: f64) -> String {
        let engine = BonusEngine::default();
        let mut buf = Vec::new();
        Grant {
            // Human: ExperienceGain 10, GoldFind 5
            character: character(0, None),
            kind,
            amount,
        }
        .execute(&engine, &mut buf)
        .unwrap();
        output(buf)
    }

    #[test]
    fn currency_grant_is_amplified() {
        assert_eq!(run(GainKind::Currency, 100.0), "currency 100 -> 105\n");
    }

    #[test]
    fn losses_pass_through() {
        assert_eq!(run(GainKind::Currency, -50.0), "currency -50 -> -50\n");
        assert_eq!(run(GainKind::Experience, 0.0), "experience 0 -> 0\n");
    }
}
