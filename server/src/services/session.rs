//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! Register and login both mint an opaque bearer token backed by a row in
//! `sessions`. Every authenticated request looks the token up again, so
//! logout is a plain row delete and expiry is enforced by `expires_at`.
//! There is no refresh: an expired token simply stops validating.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Public view of a user, returned by `/api/auth/me` and embedded in
/// login/register responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email, stored lower-cased.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// Delete every session whose `expires_at` has passed, returning the count.
pub async fn prune_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Create a session for the given user, returning the token. Expired rows
/// are pruned first; a failed prune is logged and does not block sign-in.
pub async fn create_session(pool: &PgPool, user_id: Uuid, ttl_minutes: i64) -> Result<String, sqlx::Error> {
    match prune_expired_sessions(pool).await {
        Ok(0) => {}
        Ok(n) => tracing::debug!(pruned = n, "removed expired sessions"),
        Err(e) => tracing::warn!(error = %e, "failed to prune expired sessions"),
    }
    let token = generate_token();
    sqlx::query(
        "INSERT INTO sessions (token, user_id, expires_at)
         VALUES ($1, $2, now() + make_interval(mins => $3))",
    )
    .bind(&token)
    .bind(user_id)
    .bind(i32::try_from(ttl_minutes).unwrap_or(i32::MAX))
    .execute(pool)
    .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.email, u.name
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser { id: r.get("id"), email: r.get("email"), name: r.get("name") }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
