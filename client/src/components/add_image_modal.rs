//! Modal for picking an image by file dialog, drag-and-drop, or paste.
//!
//! DESIGN
//! ======
//! The picked `web_sys::File` is not `Send`, so it lives in a local
//! `StoredValue` while the modal keeps plain signals for what it renders
//! (file name, data-URL preview). Only image MIME types are accepted; any
//! other pick is rejected with a blocking alert and leaves the previous
//! selection, if any, in place.

#[cfg(test)]
#[path = "add_image_modal_test.rs"]
mod add_image_modal_test;

use leptos::prelude::*;

pub const INVALID_IMAGE_MESSAGE: &str = "Please select a valid image file";

/// Payload handed to the wall page on submit.
#[derive(Clone, Debug)]
pub struct ImageSubmission {
    pub caption: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

pub(crate) fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Index of the first clipboard entry whose type mentions `image`.
pub(crate) fn first_image_entry<'a, I>(types: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    types.into_iter().position(|t| t.contains("image"))
}

pub(crate) fn can_submit(has_file: bool, submitting: bool) -> bool {
    has_file && !submitting
}

/// Reactive view of the current pick.
#[derive(Clone, Copy)]
struct Picked {
    name: RwSignal<Option<String>>,
    preview: RwSignal<Option<String>>,
    #[cfg(feature = "hydrate")]
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl Picked {
    fn new() -> Self {
        Self {
            name: RwSignal::new(None),
            preview: RwSignal::new(None),
            #[cfg(feature = "hydrate")]
            file: StoredValue::new_local(None),
        }
    }

    fn clear(self) {
        self.name.set(None);
        self.preview.set(None);
        #[cfg(feature = "hydrate")]
        self.file.set_value(None);
    }

    #[cfg(feature = "hydrate")]
    fn accept(self, file: web_sys::File) {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if !is_image_mime(&file.type_()) {
            crate::util::notify::alert(INVALID_IMAGE_MESSAGE);
            return;
        }

        self.name.set(Some(file.name()));
        self.preview.set(None);
        self.file.set_value(Some(file.clone()));

        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let reader_done = reader.clone();
        let preview = self.preview;
        // Fires once per reader; the JS side owns the closure and frees it after the call.
        let on_load = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
            if let Some(url) = reader_done.result().ok().and_then(|r| r.as_string()) {
                preview.set(Some(url));
            }
        });
        reader.set_onloadend(Some(on_load.unchecked_ref()));
        if reader.read_as_data_url(&file).is_err() {
            log::warn!("could not read image preview");
        }
    }
}

#[component]
pub fn AddImageModal(
    submitting: Signal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<ImageSubmission>,
) -> impl IntoView {
    let picked = Picked::new();
    let caption = RwSignal::new(String::new());
    let drag_over = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                picked.accept(file);
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, picked);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                picked.accept(file);
            }
        }
    };

    let on_paste = move |ev: leptos::ev::ClipboardEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(items) = ev.clipboard_data().map(|dt| dt.items()) else {
                return;
            };
            let types: Vec<String> = (0..items.length())
                .map(|i| items.get(i).map(|item| item.type_()).unwrap_or_default())
                .collect();
            let Some(index) = first_image_entry(types.iter().map(String::as_str)) else {
                return;
            };
            let file = u32::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .and_then(|item| item.get_as_file().ok().flatten());
            if let Some(file) = file {
                ev.prevent_default();
                picked.accept(file);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let caption = caption.get_untracked();
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = picked.file.get_value() {
                on_submit.run(ImageSubmission { caption, file });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (caption, on_submit);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if crate::state::ui::is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog add-image"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:paste=on_paste
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h3>"Add Image"</h3>
                    <button class="dialog__close" type="button" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <form on:submit=submit>
                    <label class="add-image__picker">
                        <div
                            class=move || if drag_over.get() { "add-image__drop add-image__drop--active" } else { "add-image__drop" }
                            on:dragover=move |ev: leptos::ev::DragEvent| {
                                ev.prevent_default();
                                drag_over.set(true);
                            }
                            on:dragleave=move |ev: leptos::ev::DragEvent| {
                                ev.prevent_default();
                                drag_over.set(false);
                            }
                            on:drop=on_drop
                        >
                            <Show
                                when=move || picked.preview.get().is_some()
                                fallback=move || {
                                    view! {
                                        <div class="add-image__hint">
                                            <p class="add-image__hint-main">"Click, drag & drop, or paste image"</p>
                                            <p class="add-image__hint-sub">"PNG, JPG, GIF up to 10MB"</p>
                                            <p class="add-image__hint-tip">"Tip: you can also press Ctrl+V (Cmd+V) to paste"</p>
                                            <Show when=move || picked.name.get().is_some()>
                                                <p class="add-image__file-name">{move || picked.name.get().unwrap_or_default()}</p>
                                            </Show>
                                        </div>
                                    }
                                }
                            >
                                <div class="add-image__preview">
                                    <img src=move || picked.preview.get().unwrap_or_default() alt="Preview"/>
                                    <button
                                        type="button"
                                        class="add-image__clear"
                                        title="Remove image"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            picked.clear();
                                        }
                                    >
                                        "✕"
                                    </button>
                                </div>
                            </Show>
                        </div>
                        <input class="add-image__input" type="file" accept="image/*" on:change=on_file_change/>
                    </label>

                    <label class="dialog__label">"Caption (optional)"</label>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g., Made my day!"
                        prop:value=move || caption.get()
                        on:input=move |ev| caption.set(event_target_value(&ev))
                    />

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || !can_submit(picked.name.get().is_some(), submitting.get())
                        >
                            {move || if submitting.get() { "Uploading..." } else { "Add Image" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
