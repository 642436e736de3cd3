//! Route guard for token-gated views.

#[cfg(test)]
#[path = "require_token_test.rs"]
mod require_token_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::GuardDecision;

use crate::state::auth::AuthSession;

/// Render `children` only while `session` holds a token; otherwise redirect
/// to the login route. Renders nothing until the session has been restored.
#[component]
pub fn RequireToken(session: AuthSession, children: ChildrenFn) -> impl IntoView {
    move || match session.decision() {
        GuardDecision::Pending => ().into_any(),
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
