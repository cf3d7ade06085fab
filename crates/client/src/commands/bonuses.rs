use std::io::Write;

use anyhow::Result;
use archetype_runtime::BonusEngine;
use clap::Parser;

use super::CharacterArgs;

/// List the bonuses of a character's archetype
#[derive(Parser, Debug)]
pub struct Bonuses {
    #[command(flatten)]
    pub character: CharacterArgs,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Bonuses {
    pub fn execute(self, engine: &BonusEngine, out: &mut impl Write) -> Result<()> {
        engine.on_character_loaded(&self.character.appearance());
        let summary = engine.summary();

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{summary}")?;
        }
        Ok(())
    }
}
