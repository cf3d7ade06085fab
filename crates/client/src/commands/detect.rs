use std::io::Write;

use anyhow::Result;
use archetype_core::ArchetypeDetector;
use archetype_runtime::BonusEngine;
use clap::Parser;

use super::CharacterArgs;

/// Detect the archetype of a character
#[derive(Parser, Debug)]
pub struct Detect {
    #[command(flatten)]
    pub character: CharacterArgs,
}

impl Detect {
    pub fn execute(self, engine: &BonusEngine, out: &mut impl Write) -> Result<()> {
        let appearance = self.character.appearance();
        let detection = ArchetypeDetector::inspect(&appearance);
        let archetype = engine.on_character_loaded(&appearance);

        writeln!(out, "{} ({})", archetype.display_name(), archetype)?;
        match detection.base {
            Some(base) => writeln!(out, "base race: {base}")?,
            None => writeln!(out, "base race: unknown")?,
        }
        if let Some(warning) = detection.warning {
            writeln!(out, "warning: {warning}")?;
        }
        Ok(())
    }
}
