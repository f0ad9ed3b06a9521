//! Blocking browser dialogs, clipboard, and failure reporting.
//!
//! Every user-visible failure goes through [`report_failure`] so it is both
//! logged and shown the same way. SSR paths no-op; `confirm` answers `false`
//! on the server so nothing destructive runs there.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Compose the message shown for a failed action.
#[must_use]
pub fn failure_message(action: &str, cause: &str) -> String {
    let cause = cause.trim();
    if cause.is_empty() { format!("Failed to {action}") } else { format!("Failed to {action}: {cause}") }
}

/// Blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Blocking yes/no confirmation.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Log a failed action and alert the user. Returns the message so callers
/// can also show it in the page's error banner.
pub fn report_failure(action: &str, cause: &str) -> String {
    let message = failure_message(action, cause);
    #[cfg(feature = "hydrate")]
    log::error!("{message}");
    alert(&message);
    message
}

/// Shareable form of a page URL: everything before the query string.
#[must_use]
pub fn share_url(href: &str) -> &str {
    href.split_once('?').map_or(href, |(base, _)| base)
}

/// Copy the current page URL, without its query string, to the clipboard and
/// confirm with an alert.
pub fn copy_share_link() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(href) = window.location().href() else {
            return;
        };
        let href = share_url(&href).to_owned();
        let clipboard = js_sys::Reflect::get(&window.navigator(), &"clipboard".into())
            .ok()
            .and_then(|c| c.dyn_into::<web_sys::Clipboard>().ok());
        let Some(clipboard) = clipboard else {
            alert(&href);
            return;
        };
        let promise = clipboard.write_text(&href);
        leptos::task::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => alert("Share link copied to clipboard!"),
                Err(e) => {
                    log::warn!("clipboard write failed: {e:?}");
                    alert(&href);
                }
            }
        });
    }
}
