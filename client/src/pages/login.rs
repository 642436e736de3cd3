//! Login page: username/password form backed by `POST /login`.
//!
//! The page never navigates on its own account; it hands the issued token to
//! the session and follows the route the session change points at.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use {leptos_router::NavigateOptions, session::error::GENERIC_LOGIN_ERROR};

use crate::state::auth::AuthSession;
use crate::state::login::{LoginFlow, validate_credentials};
#[cfg(feature = "hydrate")]
use crate::state::login::settle;

#[component]
pub fn LoginPage(session: AuthSession) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let flow = RwSignal::new(LoginFlow::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credential = match validate_credentials(&username.get(), &password.get()) {
            Ok(credential) => credential,
            Err(message) => {
                flow.update(|f| f.reject(message));
                return;
            }
        };
        let Some(ticket) = flow.try_update(LoginFlow::submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&credential).await;
                let Some(token) = settle(flow, ticket, result) else {
                    return;
                };
                match session.login(token) {
                    Ok(change) => navigate(change.route(), NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("session login failed: {e}");
                        flow.try_update(|f| f.reject(GENERIC_LOGIN_ERROR));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, ticket, &navigate, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Username:"
                        <input
                            class="login-input"
                            type="text"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password:"
                        <input
                            class="login-input"
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || flow.with(|f| f.error().is_some())>
                        <p class="login-message login-message--error">
                            {move || flow.with(|f| f.error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button class="login-button" type="submit">
                        {move || if flow.with(LoginFlow::is_submitting) { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
