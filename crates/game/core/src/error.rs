//! Common error infrastructure for archetype-core.
//!
//! Nothing in the core is fatal: detection always yields an archetype and the
//! catalog always builds. The types here are diagnostics returned as values so
//! the runtime can log them; the core itself never logs.

use crate::archetype::Archetype;

/// Severity level of a diagnostic, used to pick a log level.
///
/// - **Recoverable**: input was odd but a sensible default was applied
/// - **Validation**: configuration is incomplete and should be fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// A fallback was used and processing continued normally.
    ///
    /// Examples: unknown race code, unrecognized race name
    Recoverable,

    /// Configuration does not uphold a catalog invariant.
    ///
    /// Examples: an archetype with no configured bonuses
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all archetype-core diagnostics.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on what the operator has to do about it
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this diagnostic variant.
    fn error_code(&self) -> &'static str;
}

/// Raised when detection had to fall back to a default.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DetectionWarning {
    #[error("race code {code} is not recognized and no race name was supplied")]
    UnknownRaceCode { code: i32 },

    #[error("race code {code} is not recognized and race name {name:?} matched nothing")]
    UnrecognizedRaceName { code: i32, name: String },
}

impl CoreError for DetectionWarning {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRaceCode { .. } => "UNKNOWN_RACE_CODE",
            Self::UnrecognizedRaceName { .. } => "UNRECOGNIZED_RACE_NAME",
        }
    }
}

/// Catalog invariant violations found by [`crate::bonus::BonusCatalog::audit`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIssue {
    #[error("archetype {0} has no configured bonuses")]
    MissingArchetype(Archetype),
}

impl CoreError for CatalogIssue {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingArchetype(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingArchetype(_) => "MISSING_ARCHETYPE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_warnings_are_recoverable() {
        let warning = DetectionWarning::UnrecognizedRaceName {
            code: 42,
            name: "Dwarf".into(),
        };
        assert!(warning.severity().is_recoverable());
        assert_eq!(warning.error_code(), "UNRECOGNIZED_RACE_NAME");
        assert_eq!(
            warning.to_string(),
            "race code 42 is not recognized and race name \"Dwarf\" matched nothing"
        );
    }

    #[test]
    fn severity_names_are_stable_log_fields() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(!ErrorSeverity::Validation.is_recoverable());
    }

    #[test]
    fn missing_archetype_is_a_validation_issue() {
        let issue = CatalogIssue::MissingArchetype(Archetype::AmariBird);
        assert_eq!(issue.severity(), ErrorSeverity::Validation);
        assert_eq!(issue.to_string(), "archetype amari_bird has no configured bonuses");
    }
}
