//! Route admission guard.

use super::{Route, RouteMeta};

/// Outcome of checking a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested route
    Allow,
    /// Go to this route instead
    Redirect(Route),
}

/// Decide whether a navigation to a route annotated with `meta` may proceed.
///
/// `requires_auth` is checked before `requires_guest`; a route carrying both
/// behaves as an auth-only route for signed-out visitors.
pub fn decide(meta: RouteMeta, authenticated: bool) -> GuardDecision {
    if meta.requires_auth && !authenticated {
        GuardDecision::Redirect(Route::Login)
    } else if meta.requires_guest && authenticated {
        GuardDecision::Redirect(Route::Home)
    } else {
        GuardDecision::Allow
    }
}
