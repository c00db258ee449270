//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during system execution.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible execution paths.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from the App into an
//! [`AppSnapshot`], then runs registered [`Invariant`] checks against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = AppSnapshot::from_app(&app);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{LevelMatchesScore, ScoreBounded, SessionGatesRoute};
pub use snapshot::AppSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies an invariant in violation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// Profile screen shown if and only if authenticated.
    SessionGatesRoute,
    /// Displayed level derived from displayed score.
    LevelMatchesScore,
    /// Score within `0..=100`.
    ScoreBounded,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SessionGatesRoute => "session_gates_route",
            Self::LevelMatchesScore => "level_matches_score",
            Self::ScoreBounded => "score_bounded",
        })
    }
}

/// Invariant violation with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Violated invariant.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against application state.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Which invariant this is, for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against the current state.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &AppSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against application state.
/// Use [`InvariantRegistry::standard()`] for the common invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard invariants.
    ///
    /// Includes:
    /// - [`SessionGatesRoute`]: profile screen iff authenticated
    /// - [`LevelMatchesScore`]: level is derived from the shown score
    /// - [`ScoreBounded`]: score never exceeds 100
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(SessionGatesRoute);
        registry.add(LevelMatchesScore);
        registry.add(ScoreBounded);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &AppSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use vouch_app::Route;

    use super::*;

    #[test]
    fn standard_registry_has_invariants() {
        let registry = InvariantRegistry::standard();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn anonymous_login_passes_invariants() {
        let registry = InvariantRegistry::standard();
        let snapshot = AppSnapshot::anonymous(Route::Login);
        assert!(registry.check_all(&snapshot).is_ok());
    }

    #[test]
    fn reports_every_violation() {
        let registry = InvariantRegistry::standard();
        let snapshot = AppSnapshot {
            route: Route::Profile,
            authenticated: false,
            score: Some(120),
            level: None,
            ..AppSnapshot::anonymous(Route::Profile)
        };

        let violations = registry.check_all(&snapshot).unwrap_err();
        let kinds: Vec<_> = violations.iter().map(|v| v.invariant).collect();
        assert_eq!(kinds, vec![
            InvariantKind::SessionGatesRoute,
            InvariantKind::LevelMatchesScore,
            InvariantKind::ScoreBounded
        ]);
    }
}
