//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, bonus source selection, and engine setup
//! that can be reused by the CLI or any other host front-end.
pub mod builder;
pub mod config;
pub mod dirs;
pub mod sources;

pub use builder::{EngineBuilder, EngineSetup};
pub use config::BootstrapConfig;
pub use sources::{BonusSource, ContentSource, FileSource, LoadedBonuses, ReferenceSource};
