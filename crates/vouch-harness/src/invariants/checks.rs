//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use vouch_app::Route;
use vouch_core::{Level, Score};

use super::{AppSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// The profile screen is shown if and only if the session is authenticated.
///
/// Showing the profile while signed out leaks the previous user's data;
/// staying on login while signed in strands the user.
pub struct SessionGatesRoute;

impl Invariant for SessionGatesRoute {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SessionGatesRoute
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let on_profile = state.route == Route::Profile;
        if on_profile == state.authenticated {
            return Ok(());
        }

        Err(Violation {
            invariant: self.kind(),
            message: format!("route {} with authenticated={}", state.route, state.authenticated),
        })
    }
}

/// The level shown is always the classification of the score shown.
pub struct LevelMatchesScore;

impl Invariant for LevelMatchesScore {
    fn kind(&self) -> InvariantKind {
        InvariantKind::LevelMatchesScore
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        match (state.score, state.level) {
            (None, None) => Ok(()),
            (Some(score), Some(level)) if level == Level::from_score(score) => Ok(()),
            (score, level) => Err(Violation {
                invariant: self.kind(),
                message: format!("score {score:?} shown with level {level:?}"),
            }),
        }
    }
}

/// The score never exceeds the maximum.
pub struct ScoreBounded;

impl Invariant for ScoreBounded {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ScoreBounded
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        match state.score {
            Some(score) if score > Score::MAX.value() => Err(Violation {
                invariant: self.kind(),
                message: format!("score {score} exceeds {}", Score::MAX),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(score: u8, level: Level) -> AppSnapshot {
        AppSnapshot {
            authenticated: true,
            score: Some(score),
            level: Some(level),
            ..AppSnapshot::anonymous(Route::Profile)
        }
    }

    #[test]
    fn gate_accepts_matching_states() {
        assert!(SessionGatesRoute.check(&AppSnapshot::anonymous(Route::Signup)).is_ok());
        assert!(SessionGatesRoute.check(&profile(0, Level::Bronze)).is_ok());
    }

    #[test]
    fn gate_rejects_signed_in_login() {
        let state = AppSnapshot { authenticated: true, ..AppSnapshot::anonymous(Route::Login) };
        assert!(SessionGatesRoute.check(&state).is_err());
    }

    #[test]
    fn level_must_follow_score() {
        assert!(LevelMatchesScore.check(&profile(99, Level::Gold)).is_ok());
        assert!(LevelMatchesScore.check(&profile(99, Level::Platinum)).is_err());
    }

    #[test]
    fn score_bound() {
        assert!(ScoreBounded.check(&profile(100, Level::Platinum)).is_ok());
        assert!(ScoreBounded.check(&profile(101, Level::Platinum)).is_err());
    }
}
