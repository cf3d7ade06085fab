//! Stat resolution against the active archetype.
//!
//! ```text
//! host key ─parse→ StatId ─routes→ [Route...] ─fold(apply_with)→ resolved value
//! ```
//!
//! [`dispatch`] holds the static stat table; [`resolver`] holds the per-session
//! state and answers queries.

pub mod dispatch;
pub mod resolver;

pub use dispatch::{Route, StatId};
pub use resolver::{BonusResolver, GainKind, ResolverState};
