//! Modal for composing a sticky note.

#[cfg(test)]
#[path = "add_sticky_modal_test.rs"]
mod add_sticky_modal_test;

use leptos::prelude::*;

use crate::util::palette::{DEFAULT_STICKY_COLOR, STICKY_COLORS};

/// Payload handed to the wall page on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickySubmission {
    pub content: String,
    pub background_color: String,
}

/// Trimmed note text, or `None` when there is nothing to post.
pub(crate) fn note_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub(crate) fn can_submit(raw: &str, submitting: bool) -> bool {
    !submitting && note_text(raw).is_some()
}

#[component]
pub fn AddStickyModal(
    submitting: Signal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<StickySubmission>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let color = RwSignal::new(DEFAULT_STICKY_COLOR.to_owned());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(content) = note_text(&text.get_untracked()) else {
            return;
        };
        on_submit.run(StickySubmission { content, background_color: color.get_untracked() });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if crate::state::ui::is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog add-sticky" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <div class="dialog__header">
                    <h3>"Add Sticky Note"</h3>
                    <button class="dialog__close" type="button" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <form on:submit=submit>
                    <label class="dialog__label">"Your message"</label>
                    <textarea
                        class=move || format!("add-sticky__text {}", color.get())
                        rows="5"
                        placeholder="Write something nice..."
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>

                    <label class="dialog__label">"Color"</label>
                    <div class="add-sticky__swatches">
                        {STICKY_COLORS
                            .iter()
                            .map(|swatch| {
                                let class = swatch.class;
                                view! {
                                    <button
                                        type="button"
                                        title=swatch.label
                                        class=move || {
                                            let selected = if color.get() == class { " add-sticky__swatch--selected" } else { "" };
                                            format!("add-sticky__swatch {class}{selected}")
                                        }
                                        on:click=move |_| color.set(class.to_owned())
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || !can_submit(&text.get(), submitting.get())
                        >
                            {move || if submitting.get() { "Adding..." } else { "Add Note" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
