//! Bonus engine: host event handling and thread-safe stat queries.
//!
//! The engine is a single writer over one [`BonusResolver`]. Detection events
//! and reloads take the write lock and replace state wholesale; queries take
//! the read lock and never observe a half-applied change.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use archetype_core::{
    Archetype, ArchetypeDetector, BonusCatalog, BonusCategory, BonusResolver, BonusSettings,
    CatalogIssue, CharacterAppearance, CoreError, ErrorSeverity, GainKind, StatId,
};
use tracing::{debug, error, info, trace, warn};

use crate::error::{Result, RuntimeError};
use crate::summary::BonusSummary;

/// Shared entry point for hosts.
///
/// `BonusEngine` is `Send + Sync`; wrap it in an `Arc` to share it between the
/// host's event thread and its stat-query callers.
pub struct BonusEngine {
    resolver: RwLock<BonusResolver>,
}

impl BonusEngine {
    /// Creates an engine and logs any catalog issues.
    pub fn new(catalog: BonusCatalog, settings: BonusSettings) -> Self {
        Self::with_issues(catalog, settings).0
    }

    /// Like [`BonusEngine::new`], but also returns the catalog issues found,
    /// already logged.
    pub fn with_issues(
        catalog: BonusCatalog,
        settings: BonusSettings,
    ) -> (Self, Vec<CatalogIssue>) {
        let issues = catalog.audit();
        report_issues(&issues);
        info!(
            target: "archetype::engine",
            entries = catalog.len(),
            enabled = settings.enabled,
            "bonus engine ready"
        );
        let engine = Self::from_resolver(BonusResolver::new(Arc::new(catalog), settings));
        (engine, issues)
    }

    pub fn from_resolver(resolver: BonusResolver) -> Self {
        Self {
            resolver: RwLock::new(resolver),
        }
    }

    // The resolver is only ever replaced wholesale, so a panic while holding
    // the lock cannot leave it inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, BonusResolver> {
        self.resolver.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BonusResolver> {
        self.resolver.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ===== host events =====

    /// Detects the archetype of a freshly loaded character and activates it.
    ///
    /// Loading the same character twice is a no-op apart from a debug log.
    pub fn on_character_loaded(&self, appearance: &CharacterAppearance) -> Archetype {
        if appearance.version > CharacterAppearance::VERSION {
            warn!(
                target: "archetype::engine",
                version = appearance.version,
                supported = CharacterAppearance::VERSION,
                "appearance descriptor is newer than supported; reading known fields only"
            );
        }

        let detection = ArchetypeDetector::inspect(appearance);
        if let Some(warning) = &detection.warning {
            log_issue(warning);
        }

        let changed = self.write().assign(appearance.character, detection.archetype);
        if changed {
            info!(
                target: "archetype::engine",
                character = %appearance.character,
                race_code = appearance.race_code,
                archetype = %detection.archetype,
                "archetype detected"
            );
        } else {
            debug!(
                target: "archetype::engine",
                character = %appearance.character,
                archetype = %detection.archetype,
                "character reloaded with unchanged archetype"
            );
        }
        detection.archetype
    }

    /// Forgets the active archetype. Must precede the next load.
    pub fn on_character_switched(&self) {
        let mut resolver = self.write();
        if let Some(owner) = resolver.state().owner() {
            debug!(target: "archetype::engine", character = %owner, "character switched");
        }
        resolver.reset();
    }

    /// Activates an archetype directly, bypassing detection.
    pub fn set_archetype(&self, archetype: Archetype) {
        self.write().set_archetype(archetype);
        info!(target: "archetype::engine", %archetype, "archetype set");
    }

    /// Swaps in a new catalog and settings. The active archetype is kept.
    ///
    /// Returns the catalog issues found, already logged.
    pub fn reload(&self, catalog: BonusCatalog, settings: BonusSettings) -> Vec<CatalogIssue> {
        let issues = catalog.audit();
        report_issues(&issues);
        let entries = catalog.len();
        let enabled = settings.enabled;

        let mut resolver = self.write();
        resolver.replace_catalog(Arc::new(catalog), settings);
        info!(
            target: "archetype::engine",
            entries,
            enabled,
            archetype = ?resolver.get_archetype(),
            "bonus configuration reloaded"
        );
        issues
    }

    // ===== queries =====

    pub fn archetype(&self) -> Option<Archetype> {
        self.read().get_archetype()
    }

    pub fn settings(&self) -> BonusSettings {
        self.read().settings().clone()
    }

    pub fn has_bonus(&self, category: BonusCategory) -> bool {
        self.read().has_bonus(category)
    }

    pub fn get_magnitude(&self, category: BonusCategory) -> f64 {
        self.read().get_magnitude(category)
    }

    pub fn apply(&self, base: f64, category: BonusCategory) -> f64 {
        self.read().apply(base, category)
    }

    /// Resolves a host stat by key. Unknown keys pass through.
    pub fn resolve(&self, key: &str, raw: f64) -> f64 {
        let value = self.read().resolve_key(key, raw);
        trace!(target: "archetype::resolve", key, raw, value);
        value
    }

    pub fn resolve_stat(&self, stat: StatId, raw: f64) -> f64 {
        let value = self.read().resolve(stat, raw);
        trace!(target: "archetype::resolve", %stat, raw, value);
        value
    }

    /// Resolves a host stat by integer code. Unknown codes pass through.
    pub fn resolve_code(&self, code: u32, raw: f64) -> f64 {
        match StatId::from_code(code) {
            Some(stat) => self.resolve_stat(stat, raw),
            None => raw,
        }
    }

    /// Like [`BonusEngine::resolve`], but rejects keys that name no stat.
    pub fn try_resolve(&self, key: &str, raw: f64) -> Result<f64> {
        let stat = StatId::parse(key).ok_or_else(|| RuntimeError::UnknownStat(key.to_owned()))?;
        Ok(self.resolve_stat(stat, raw))
    }

    /// Like [`BonusEngine::resolve_code`], but rejects unknown codes.
    pub fn try_resolve_code(&self, code: u32, raw: f64) -> Result<f64> {
        let stat = StatId::from_code(code).ok_or(RuntimeError::UnknownStatCode(code))?;
        Ok(self.resolve_stat(stat, raw))
    }

    pub fn apply_positive_gain(&self, category: BonusCategory, amount: f64) -> f64 {
        self.read().apply_positive_gain(category, amount)
    }

    /// Amplifies an experience or currency grant at the moment it is made.
    pub fn grant(&self, kind: GainKind, amount: f64) -> f64 {
        let granted = self.read().apply_gain(kind, amount);
        trace!(target: "archetype::grant", %kind, amount, granted);
        granted
    }

    /// Snapshot of the active archetype and its bonus list.
    pub fn summary(&self) -> BonusSummary {
        let resolver = self.read();
        let state = resolver.state();
        BonusSummary {
            archetype: state.archetype(),
            character: state.owner(),
            enabled: resolver.settings().enabled,
            entries: resolver.active_bonuses().to_vec(),
        }
    }
}

impl Default for BonusEngine {
    /// Engine over the reference configuration with default settings.
    fn default() -> Self {
        Self::new(
            BonusCatalog::build(&archetype_core::reference_config()),
            BonusSettings::default(),
        )
    }
}

fn report_issues(issues: &[CatalogIssue]) {
    for issue in issues {
        log_issue(issue);
    }
}

fn log_issue(issue: &dyn CoreError) {
    match issue.severity() {
        severity @ ErrorSeverity::Recoverable => warn!(
            target: "archetype::engine",
            severity = severity.as_str(),
            code = issue.error_code(),
            "{issue}"
        ),
        severity @ ErrorSeverity::Validation => error!(
            target: "archetype::engine",
            severity = severity.as_str(),
            code = issue.error_code(),
            "{issue}"
        ),
    }
}
