//! Profile page shown behind the token guard.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;

#[component]
pub fn ProfilePage(session: AuthSession) -> impl IntoView {
    let navigate = use_navigate();

    let on_logout = move || match session.logout() {
        Ok(change) => navigate(change.route(), NavigateOptions::default()),
        Err(e) => leptos::logging::warn!("logout failed: {e}"),
    };

    view! { <ProfileCard on_logout/> }
}

/// Profile markup. Needs no router, so it renders on its own.
#[component]
pub fn ProfileCard<F>(on_logout: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="profile-page">
            <h1>"User Profile"</h1>
            <p>"Welcome to your profile!"</p>
            <button class="profile-logout" on:click=move |_| on_logout()>
                "Logout"
            </button>
        </div>
    }
}
