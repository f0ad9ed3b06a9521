//! Full-screen image viewer.

use leptos::prelude::*;

use crate::state::ui::is_dismiss_key;

/// Shows `url` over a dark backdrop. Closes on Escape or a backdrop click;
/// clicks on the image itself are swallowed. The window key listener exists
/// only while the lightbox is mounted.
#[component]
pub fn Lightbox(url: String, caption: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_dismiss_key(&ev.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || key_handle.remove());

    let alt = caption.clone().unwrap_or_else(|| "Full size image".to_owned());

    view! {
        <div class="lightbox" on:click=move |_| on_close.run(())>
            <button class="lightbox__close" title="Close" on:click=move |_| on_close.run(())>
                "✕"
            </button>
            <img class="lightbox__image" src=url alt=alt on:click=move |ev| ev.stop_propagation()/>
            {caption.map(|text| view! { <p class="lightbox__caption">{text}</p> })}
            <p class="lightbox__hint">"Press Esc or click outside to close"</p>
        </div>
    }
}
