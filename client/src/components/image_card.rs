//! Image item renderer with inline caption editing.

#[cfg(test)]
#[path = "image_card_test.rs"]
mod image_card_test;

use leptos::prelude::*;

use crate::net::types::{Item, ItemUpdate};
use crate::state::ui::LightboxImage;
use crate::util::{backend, notify};

/// Inline SVG shown when the stored image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;charset=utf-8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='400' height='500'%3E%3Crect width='100%25' height='100%25' fill='%23e2e8f0'/%3E%3Ctext x='50%25' y='50%25' fill='%2364748b' font-family='sans-serif' font-size='20' text-anchor='middle'%3EImage Not Found%3C/text%3E%3C/svg%3E";

pub(crate) fn caption_update(draft: &str) -> ItemUpdate {
    ItemUpdate { caption: Some(draft.trim().to_owned()), ..ItemUpdate::default() }
}

pub(crate) fn image_src(item: &Item) -> String {
    item.image_url
        .as_deref()
        .map_or_else(|| PLACEHOLDER_IMAGE.to_owned(), backend::resolve)
}

/// Source shown on screen and in the lightbox: the placeholder once the
/// stored image has failed to load.
pub(crate) fn display_src(src: &str, broken: bool) -> String {
    if broken { PLACEHOLDER_IMAGE.to_owned() } else { src.to_owned() }
}

#[component]
pub fn ImageCard(
    item: Item,
    edit_mode: Signal<bool>,
    on_open: Callback<LightboxImage>,
    on_update: Callback<(String, ItemUpdate)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = StoredValue::new(item.id.clone());
    let src = image_src(&item);
    let saved_caption = item.caption.clone().filter(|c| !c.is_empty());
    let draft = RwSignal::new(item.caption.clone().unwrap_or_default());
    let editing = RwSignal::new(false);
    let broken = RwSignal::new(false);
    let alt = saved_caption.clone().unwrap_or_else(|| "User feedback".to_owned());

    let open_src = src.clone();
    let open_caption = saved_caption.clone();
    let on_frame_click = move |_| {
        if !edit_mode.get_untracked() {
            let url = display_src(&open_src, broken.get_untracked());
            on_open.run(LightboxImage { url, caption: open_caption.clone() });
        }
    };

    let on_save = move |_| {
        if !edit_mode.get_untracked() {
            return;
        }
        on_update.run((id.get_value(), caption_update(&draft.get_untracked())));
        editing.set(false);
    };

    let on_delete_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if edit_mode.get_untracked() && notify::confirm("Delete this item?") {
            on_delete.run(id.get_value());
        }
    };

    view! {
        <div class="wall-card wall-card--image">
            <div class="wall-card__frame" on:click=on_frame_click>
                <img
                    class="wall-card__image"
                    src=move || display_src(&src, broken.get())
                    alt=alt
                    on:error=move |_| broken.set(true)
                />
                <Show when=move || edit_mode.get()>
                    <div class="wall-card__tools">
                        <button
                            class="wall-card__tool"
                            title="Edit caption"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                editing.set(true);
                            }
                        >
                            "✎"
                        </button>
                        <button class="wall-card__tool wall-card__tool--danger" title="Delete" on:click=on_delete_click>
                            "🗑"
                        </button>
                    </div>
                </Show>
            </div>
            <Show
                when=move || editing.get() && edit_mode.get()
                fallback={
                    let saved_caption = saved_caption.clone();
                    move || saved_caption.clone().map(|text| view! { <p class="wall-card__caption">{text}</p> })
                }
            >
                <div class="wall-card__edit">
                    <input
                        class="wall-card__input"
                        type="text"
                        placeholder="Add a caption..."
                        autofocus
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary btn--small" on:click=on_save>
                        "Save"
                    </button>
                </div>
            </Show>
        </div>
    }
}
