//! Password account service: registration, credential checks, hashing.
//!
//! DESIGN
//! ======
//! Emails are normalized (trimmed, lower-cased) before every lookup so the
//! unique index on `users.email` is effectively case-insensitive. Passwords
//! are stored as Argon2id PHC strings; the plaintext never leaves this module.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::SessionUser;

/// Shortest password accepted at registration, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Name is required")]
    EmptyName,
    #[error("Password must be at least 6 characters")]
    ShortPassword,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Incorrect email or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Trim and lower-case an email; `None` unless it looks like `local@domain.tld`.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.contains('@') || normalized.chars().any(char::is_whitespace) {
        return None;
    }
    let (host, tld) = domain.rsplit_once('.')?;
    if host.is_empty() || tld.is_empty() {
        return None;
    }
    Some(normalized)
}

/// Validate raw register input into a [`NewAccount`].
///
/// # Errors
///
/// Returns the first failing rule: email syntax, blank name, password
/// shorter than [`MIN_PASSWORD_CHARS`].
pub fn validate_registration(email: &str, name: &str, password: &str) -> Result<NewAccount, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AuthError::EmptyName);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AuthError::ShortPassword);
    }
    Ok(NewAccount { email, name: name.to_owned(), password: password.to_owned() })
}

/// Hash a password with Argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns `Hash` if the hasher rejects its parameters.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Check a password against a stored PHC hash. Malformed hashes never verify.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Insert a new user, returning its public view.
///
/// # Errors
///
/// Returns `EmailTaken` when the email is already registered.
pub async fn register_user(pool: &PgPool, account: &NewAccount) -> Result<SessionUser, AuthError> {
    let existing = sqlx::query("SELECT 1 FROM users WHERE email = $1")
        .bind(&account.email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(AuthError::EmailTaken);
    }

    let password_hash = hash_password(&account.password)?;
    let user_id = Uuid::new_v4();
    let inserted = sqlx::query("INSERT INTO users (id, email, name, password_hash) VALUES ($1, $2, $3, $4)")
        .bind(user_id)
        .bind(&account.email)
        .bind(&account.name)
        .bind(&password_hash)
        .execute(pool)
        .await;

    match inserted {
        Ok(_) => Ok(SessionUser { id: user_id, email: account.email.clone(), name: account.name.clone() }),
        Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            Err(AuthError::EmailTaken)
        }
        Err(e) => Err(e.into()),
    }
}

/// Look up a user by email and verify the password.
///
/// # Errors
///
/// Returns `InvalidCredentials` for an unknown email or a wrong password.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<SessionUser, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;
    let row = sqlx::query("SELECT id, email, name, password_hash FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let stored_hash: String = row.get("password_hash");
    if !verify_password(password, &stored_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(SessionUser { id: row.get("id"), email: row.get("email"), name: row.get("name") })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
