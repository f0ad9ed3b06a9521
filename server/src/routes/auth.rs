//! Auth routes: password register/login, bearer session extraction.
//!
//! DESIGN
//! ======
//! Sessions are opaque tokens stored in Postgres and presented by the client
//! as `Authorization: Bearer <token>`. A request without a well-formed
//! header is rejected before the database is consulted.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::Json;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::auth::{self as auth_svc, AuthError};
use crate::services::session::{self, SessionUser};
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized)?;
        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        let app_state = AppState::from_ref(state);
        let Some(user) = session::validate_session(&app_state.pool, token).await? else {
            tracing::warn!("rejected unknown or expired session token");
            return Err(ApiError::Unauthorized);
        };

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: SessionUser,
}

impl TokenResponse {
    fn bearer(access_token: String, user: SessionUser) -> Self {
        Self { access_token, token_type: "bearer", user }
    }
}

pub(crate) fn auth_error_to_api(err: AuthError) -> ApiError {
    match err {
        AuthError::InvalidCredentials => ApiError::InvalidCredentials,
        AuthError::InvalidEmail | AuthError::EmptyName | AuthError::ShortPassword | AuthError::EmailTaken => {
            ApiError::BadRequest(err.to_string())
        }
        AuthError::Hash(_) | AuthError::Db(_) => ApiError::internal(err),
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/register`: create an account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let account =
        auth_svc::validate_registration(&body.email, &body.name, &body.password).map_err(auth_error_to_api)?;
    let user = auth_svc::register_user(&state.pool, &account)
        .await
        .map_err(auth_error_to_api)?;
    let token = session::create_session(&state.pool, user.id, state.config.session_ttl_minutes).await?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(Json(TokenResponse::bearer(token, user)))
}

/// `POST /api/auth/login`: verify credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = match auth_svc::authenticate(&state.pool, &body.email, &body.password).await {
        Ok(user) => user,
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("login rejected");
            return Err(ApiError::InvalidCredentials);
        }
        Err(e) => return Err(auth_error_to_api(e)),
    };
    let token = session::create_session(&state.pool, user.id, state.config.session_ttl_minutes).await?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse::bearer(token, user)))
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete the presented session.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> Result<StatusCode, ApiError> {
    session::delete_session(&state.pool, &auth.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
