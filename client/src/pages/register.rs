//! Registration page: create an account and sign in with it.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::login::redirect_when_signed_in;
use crate::state::auth::AuthState;

/// Shortest password the server accepts, in characters.
pub(crate) const MIN_PASSWORD_CHARS: usize = 6;

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Client-side checks mirroring the server's: non-blank name, an address of
/// the form `local@domain.tld`, and a password of at least six characters.
pub(crate) fn validate_registration(name: &str, email: &str, password: &str) -> Result<Registration, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    let email = email.trim();
    if !looks_like_email(email) {
        return Err("Invalid email address");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.rsplit_once('.').is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[component]
pub fn RegisterPage(auth: RwSignal<AuthState>) -> impl IntoView {
    let name = RwSignal::new(String::new());
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
        let registration = match validate_registration(&name.get(), &email.get(), &password.get()) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::register(&registration.name, &registration.email, &registration.password).await;
            match result {
                Ok(resp) => {
                    crate::util::session_store::save_token(&resp.access_token);
                    auth.update(|a| a.sign_in(resp.access_token, resp.user));
                    info.set(String::new());
                }
                Err(e) => info.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = registration;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Wall of Love ❤️"</h1>
                <p class="login-card__subtitle">"Create your account to start editing"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        autocomplete="new-password"
                        minlength="6"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__footer">
                    "Already have an account? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
