//! Error types surfaced by the runtime API.
//!
//! The lenient entry points never fail; these errors only come from the
//! strict variants used by tools that want to report bad input.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("unknown stat key {0:?}")]
    UnknownStat(String),

    #[error("unknown stat code {0}")]
    UnknownStatCode(u32),
}
