//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Failed responses
//! are reduced to one string: the server's `detail` when the body has one,
//! else the HTTP status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Item, ItemUpdate, NewItem, TokenResponse, User};
#[cfg(feature = "hydrate")]
use super::types::UploadResponse;
use crate::state::auth::Session;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::backend;

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(item_id: &str) -> String {
    backend::resolve(&format!("/api/items/{item_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    backend::resolve(path)
}

/// Extract `detail` from an error body.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16, body: &str) -> String {
    error_detail(body).unwrap_or_else(|| format!("request failed: {status}"))
}

/// Why `/api/auth/me` did not yield a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurrentUserError {
    /// The server answered 401: the token is no longer valid.
    Rejected,
    /// Transport failure or any other response; the token may still be good.
    Unavailable(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn current_user_failure(status: u16, body: &str) -> CurrentUserError {
    if status == 401 {
        CurrentUserError::Rejected
    } else {
        CurrentUserError::Unavailable(request_failed_message(status, body))
    }
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    request_failed_message(status, &body)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        return Err(failure(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's detail (e.g. `Incorrect email or password`) or a
/// transport error string.
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint("/api/auth/login"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(UNAVAILABLE.to_owned())
    }
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the server's detail (e.g. `Email already registered`) or a
/// transport error string.
pub async fn register(name: &str, email: &str, password: &str) -> Result<TokenResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint("/api/auth/register"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(UNAVAILABLE.to_owned())
    }
}

/// Fetch the user behind a session from `/api/auth/me`.
///
/// # Errors
///
/// `Rejected` only when the server answers 401; every other failure,
/// including transport errors and SSR, is `Unavailable`.
pub async fn fetch_current_user(session: &Session) -> Result<User, CurrentUserError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/api/auth/me"))
            .header("Authorization", &session.authorization())
            .send()
            .await
            .map_err(|e| CurrentUserError::Unavailable(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(current_user_failure(status, &body));
        }
        resp.json::<User>().await.map_err(|e| CurrentUserError::Unavailable(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(CurrentUserError::Unavailable(UNAVAILABLE.to_owned()))
    }
}

/// End the session server-side. Best effort: the caller clears local state
/// regardless.
pub async fn logout(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(&endpoint("/api/auth/logout"))
            .header("Authorization", &session.authorization())
            .send()
            .await
        {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

// =============================================================================
// ITEMS
// =============================================================================

/// `GET /api/items`: public, insertion order.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_items() -> Result<Vec<Item>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/api/items"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(UNAVAILABLE.to_owned())
    }
}

/// `POST /api/items`.
///
/// # Errors
///
/// Returns the server's detail or a transport error string.
pub async fn create_item(session: &Session, item: &NewItem) -> Result<Item, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/api/items"))
            .header("Authorization", &session.authorization())
            .json(item)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, item);
        Err(UNAVAILABLE.to_owned())
    }
}

/// `PUT /api/items/{id}`.
///
/// # Errors
///
/// Returns the server's detail (`No valid fields to update`,
/// `Item not found`) or a transport error string.
pub async fn update_item(session: &Session, item_id: &str, update: &ItemUpdate) -> Result<Item, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&item_endpoint(item_id))
            .header("Authorization", &session.authorization())
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, item_id, update);
        Err(UNAVAILABLE.to_owned())
    }
}

/// `DELETE /api/items/{id}`.
///
/// # Errors
///
/// Returns the server's detail or a transport error string.
pub async fn delete_item(session: &Session, item_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&item_endpoint(item_id))
            .header("Authorization", &session.authorization())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, item_id);
        Err(UNAVAILABLE.to_owned())
    }
}

// =============================================================================
// UPLOAD
// =============================================================================

/// `POST /api/upload` with the file as multipart field `file`.
///
/// # Errors
///
/// Returns the server's detail (e.g. `File must be an image`) or a
/// transport error string.
#[cfg(feature = "hydrate")]
pub async fn upload_image(session: &Session, file: &web_sys::File) -> Result<UploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{e:?}"))?;
    let resp = gloo_net::http::Request::post(&endpoint("/api/upload"))
        .header("Authorization", &session.authorization())
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}
