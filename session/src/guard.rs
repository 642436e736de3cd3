//! Route guard decision for token-gated views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::LOGIN_ROUTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session has not been restored yet; render nothing.
    Pending,
    /// Render the protected view unchanged.
    Allow,
    /// Navigate to the given route instead of rendering.
    Redirect(&'static str),
}

/// Decide what a protected route renders for the current session.
#[must_use]
pub fn guard(pending: bool, token: Option<&str>) -> GuardDecision {
    if pending {
        return GuardDecision::Pending;
    }
    match token {
        Some(t) if !t.is_empty() => GuardDecision::Allow,
        _ => GuardDecision::Redirect(LOGIN_ROUTE),
    }
}
