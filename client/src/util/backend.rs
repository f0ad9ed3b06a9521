//! Backend URL resolution.
//!
//! The backend base comes from `WALL_BACKEND_URL` at compile time. Empty
//! (the default) means same origin, which is how the SSR server serves both
//! the app and the API.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

/// Compile-time backend base, without a trailing slash.
#[must_use]
pub fn backend_base() -> &'static str {
    option_env!("WALL_BACKEND_URL").unwrap_or("").trim_end_matches('/')
}

/// Join a base with a server-relative path. Absolute URLs pass through.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_owned();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
}

/// Resolve an API or asset path against the configured backend.
#[must_use]
pub fn resolve(path: &str) -> String {
    join_url(backend_base(), path)
}
