//! Sticky note renderer with inline content editing.

#[cfg(test)]
#[path = "sticky_note_test.rs"]
mod sticky_note_test;

use leptos::prelude::*;

use crate::net::types::{Item, ItemUpdate};
use crate::util::{notify, palette};

/// Content update for a saved draft; blank drafts are not saved.
pub(crate) fn content_update(draft: &str) -> Option<ItemUpdate> {
    let trimmed = draft.trim();
    (!trimmed.is_empty()).then(|| ItemUpdate { content: Some(trimmed.to_owned()), ..ItemUpdate::default() })
}

#[component]
pub fn StickyNote(
    item: Item,
    edit_mode: Signal<bool>,
    on_update: Callback<(String, ItemUpdate)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = StoredValue::new(item.id.clone());
    let background = palette::background_class(item.background_color.as_deref());
    let text_class = palette::text_class_for(item.background_color.as_deref());
    let content = item.content.clone().unwrap_or_default();
    let draft = RwSignal::new(content.clone());
    let editing = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if !edit_mode.get_untracked() {
            return;
        }
        match content_update(&draft.get_untracked()) {
            Some(update) => {
                on_update.run((id.get_value(), update));
                editing.set(false);
            }
            None => notify::alert("A note cannot be empty"),
        }
    };

    let on_delete_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if edit_mode.get_untracked() && notify::confirm("Delete this note?") {
            on_delete.run(id.get_value());
        }
    };

    view! {
        <div class="wall-card wall-card--sticky">
            <div class=format!("sticky {background}")>
                <Show
                    when=move || editing.get() && edit_mode.get()
                    fallback=move || view! { <p class=format!("sticky__text {text_class}")>{content.clone()}</p> }
                >
                    <textarea
                        class=format!("sticky__editor {text_class}")
                        autofocus
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                </Show>
                <Show when=move || edit_mode.get()>
                    <div class="wall-card__tools">
                        <Show
                            when=move || editing.get()
                            fallback=move || {
                                view! {
                                    <button
                                        class="wall-card__tool"
                                        title="Edit"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            editing.set(true);
                                        }
                                    >
                                        "✎"
                                    </button>
                                }
                            }
                        >
                            <button class="wall-card__tool wall-card__tool--ok" title="Save" on:click=on_save>
                                "✓"
                            </button>
                        </Show>
                        <button class="wall-card__tool wall-card__tool--danger" title="Delete" on:click=on_delete_click>
                            "🗑"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
