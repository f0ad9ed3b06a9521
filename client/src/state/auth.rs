//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one `RwSignal<AuthState>` and hands it to every page as
//! a prop. API calls that need credentials take the `Session` explicitly, so
//! there is no ambient token lookup anywhere below the root.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::CurrentUserError;
use crate::net::types::User;

/// Bearer credentials for the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
}

impl Session {
    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Authentication state: the session, the user it belongs to, and whether
/// the stored token is still being checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State at page load: a stored token is pending validation.
    #[must_use]
    pub fn restoring(token: Option<String>) -> Self {
        let session = token.filter(|t| !t.trim().is_empty()).map(|token| Session { token });
        let loading = session.is_some();
        Self { session, user: None, loading }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn sign_in(&mut self, token: String, user: User) {
        self.session = Some(Session { token });
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.user = None;
        self.loading = false;
    }

    /// Apply the result of validating a restored token. Only a rejected
    /// token ends the session; an unreachable server keeps it for later
    /// requests. Returns `true` when the stored token should be discarded.
    pub fn restored(&mut self, result: Result<User, CurrentUserError>) -> bool {
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.loading = false;
                false
            }
            Err(CurrentUserError::Rejected) => {
                self.sign_out();
                true
            }
            Err(CurrentUserError::Unavailable(_)) => {
                self.loading = false;
                false
            }
        }
    }
}
