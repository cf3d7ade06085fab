//! Session orchestration for archetype bonuses.
//!
//! [`BonusEngine`] is the single object a host embeds. It owns the
//! [`BonusResolver`](archetype_core::BonusResolver) behind a lock, turns host
//! events (character loaded, character switched, configuration reloaded) into
//! state replacements, and answers stat queries from any thread.
//!
//! Modules are organized by responsibility:
//! - [`engine`] hosts the engine and its event entry points
//! - [`summary`] exposes the display snapshot of the active bonuses
//! - [`error`] holds the errors of the strict query variants
pub mod engine;
pub mod error;
pub mod summary;

pub use engine::BonusEngine;
pub use error::{Result, RuntimeError};
pub use summary::BonusSummary;
