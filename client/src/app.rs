//! Root application component with routing and the session handle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{calculator::Calculator, require_token::RequireToken};
use crate::pages::{login::LoginPage, profile::ProfilePage};
use crate::state::auth::AuthSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one `AuthSession` for the app and hands it to every route that
/// needs it. The persisted token is read after hydration so the server and
/// browser render the same initial markup.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AuthSession::new();
    Effect::new(move |_| session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/tokenpass.css"/>
        <Title text="tokenpass"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <LoginPage session/> }/>
                <Route
                    path=StaticSegment("profile")
                    view=move || {
                        view! {
                            <RequireToken session>
                                <ProfilePage session/>
                            </RequireToken>
                        }
                    }
                />
                <Route path=StaticSegment("calculator") view=Calculator/>
            </Routes>
        </Router>
    }
}
