//! Session token persistence in `localStorage`.
//!
//! The token survives reloads so a signed-in user stays signed in until
//! logout or server-side expiry. SSR paths no-op.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "wall_of_love_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.set_item(STORAGE_KEY, token).is_err() {
                log::warn!("could not persist session token");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
