//! Root application component with routing and the shared auth signal.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, register::RegisterPage, wall::WallPage};
use crate::state::auth::AuthState;

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
/// Owns the auth signal and passes it to each page. A token left in local
/// storage by an earlier visit is validated against `/api/auth/me` once the
/// app hydrates; a rejected token is cleared.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());

    // Effects run after hydration only, so the server render and the first
    // client render agree on the signed-out state.
    Effect::new(move || {
        let restored = AuthState::restoring(crate::util::session_store::load_token());
        let session = restored.session.clone();
        auth.set(restored);
        #[cfg(feature = "hydrate")]
        if let Some(session) = session {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_current_user(&session).await;
                if let Err(crate::net::api::CurrentUserError::Unavailable(e)) = &result {
                    log::warn!("could not validate stored session: {e}");
                }
                let discard = auth.try_update(|a| a.restored(result)).unwrap_or(false);
                if discard {
                    log::info!("stored session rejected; signing out");
                    crate::util::session_store::clear_token();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wall.css"/>
        <Title text="Wall of Love"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <WallPage auth=auth/> }/>
                <Route path=StaticSegment("login") view=move || view! { <LoginPage auth=auth/> }/>
                <Route path=StaticSegment("register") view=move || view! { <RegisterPage auth=auth/> }/>
            </Routes>
        </Router>
    }
}
