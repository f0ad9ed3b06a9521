//! Login page: email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the token is persisted to local storage and the shared auth
//! signal is updated; an effect then sends the user back to the wall.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Leave the auth pages once a session is established.
pub(crate) fn redirect_when_signed_in(auth: RwSignal<AuthState>) {
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });
}

#[component]
pub fn LoginPage(auth: RwSignal<AuthState>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    redirect_when_signed_in(auth);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    crate::util::session_store::save_token(&resp.access_token);
                    auth.update(|a| a.sign_in(resp.access_token, resp.user));
                    info.set(String::new());
                }
                Err(e) => info.set(format!("Sign-in failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Wall of Love ❤️"</h1>
                <p class="login-card__subtitle">"Sign in to edit your wall"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__footer">
                    "No account yet? " <A href="/register">"Create one"</A>
                </p>
                <p class="login-card__footer">
                    <A href="/">"Back to the wall"</A>
                </p>
            </div>
        </div>
    }
}
