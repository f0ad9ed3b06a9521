//! Wall page: the item grid, edit mode, add flows, and periodic refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/` route and the only place that talks to the items API.
//! Components below it render items and report intent through callbacks;
//! this page turns that intent into requests and patches `WallState` from
//! the server's responses.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and leave the current list alone. Mutation
//! failures leave local state unchanged and go through
//! `notify::report_failure` plus the page's error banner.

#[cfg(test)]
#[path = "wall_test.rs"]
mod wall_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::add_image_modal::{AddImageModal, ImageSubmission};
use crate::components::add_sticky_modal::{AddStickyModal, StickySubmission};
use crate::components::header::Header;
use crate::components::image_card::ImageCard;
use crate::components::lightbox::Lightbox;
use crate::components::sticky_note::StickyNote;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Item, ItemKind, ItemUpdate, NewItem};
use crate::state::auth::{AuthState, Session};
use crate::state::ui::{AddModal, LightboxImage, UiState};
use crate::state::wall::{EditToggle, WallState};
use crate::util::{notify, position, session_store};

/// Refresh cadence while the wall is in view mode.
pub const POLL_INTERVAL_SECS: u64 = 30;

/// Secondary line of the empty-state message.
pub(crate) fn empty_state_hint(signed_in: bool) -> &'static str {
    if signed_in {
        "Start adding screenshots of the kind words people have shared with you."
    } else {
        "Sign in to start building your wall"
    }
}

/// Grid cell class for an item, flagging the one being dragged.
pub(crate) fn cell_class(item_id: &str, dragging: Option<&str>) -> &'static str {
    if dragging == Some(item_id) {
        "wall-grid__cell wall-grid__cell--dragging"
    } else {
        "wall-grid__cell"
    }
}

/// Identity of a rendered grid cell. A cell is rebuilt only when its item's
/// displayed fields change, so a note being edited keeps its draft across
/// refreshes that leave it untouched. Grid position is left out: cells are
/// laid out in list order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ItemRenderKey {
    id: String,
    content: Option<String>,
    image_url: Option<String>,
    caption: Option<String>,
    background_color: Option<String>,
}

pub(crate) fn render_key(item: &Item) -> ItemRenderKey {
    ItemRenderKey {
        id: item.id.clone(),
        content: item.content.clone(),
        image_url: item.image_url.clone(),
        caption: item.caption.clone(),
        background_color: item.background_color.clone(),
    }
}

// =============================================================================
// REQUEST PLUMBING
// =============================================================================

/// Start a fetch of the full item list. The result is applied only if no
/// newer fetch or mutation has happened in the meantime.
fn refresh(wall: RwSignal<WallState>) {
    let Some(seq) = wall.try_update(WallState::begin_fetch) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::fetch_items().await {
            Ok(items) => {
                let applied = wall.try_update(|w| w.apply_fetch(seq, items)).unwrap_or(false);
                if !applied {
                    log::debug!("discarded stale item fetch {seq}");
                }
            }
            Err(e) => {
                log::warn!("item fetch failed: {e}");
                wall.update(WallState::fetch_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

fn report(wall: RwSignal<WallState>, action: &str, cause: &str) {
    let message = notify::report_failure(action, cause);
    wall.update(|w| w.report_failure(message));
}

/// Run an authenticated request, apply its result to the wall, and report
/// failures. `settle` runs last with whether the request succeeded.
fn run_mutation<T, Fut>(
    auth: RwSignal<AuthState>,
    wall: RwSignal<WallState>,
    action: &'static str,
    request: impl FnOnce(Session) -> Fut + 'static,
    apply: impl FnOnce(&mut WallState, T) + 'static,
    settle: impl FnOnce(bool) + 'static,
) where
    T: 'static,
    Fut: std::future::Future<Output = Result<T, String>> + 'static,
{
    let Some(session) = auth.with_untracked(|a| a.session.clone()) else {
        report(wall, action, "you are not signed in");
        settle(false);
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match request(session).await {
            Ok(value) => {
                wall.update(|w| apply(w, value));
                settle(true);
            }
            Err(e) => {
                report(wall, action, &e);
                settle(false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, request, apply, settle);
}

// =============================================================================
// PAGE
// =============================================================================

/// Callbacks shared by every rendered item.
#[derive(Clone, Copy)]
struct CardActions {
    open: Callback<LightboxImage>,
    update: Callback<(String, ItemUpdate)>,
    delete: Callback<String>,
    drop_on: Callback<String>,
}

#[component]
pub fn WallPage(auth: RwSignal<AuthState>) -> impl IntoView {
    let wall = RwSignal::new(WallState::default());
    let ui = RwSignal::new(UiState::default());

    let items = Memo::new(move |_| wall.with(|w| w.items.clone()));
    let edit_mode = Memo::new(move |_| wall.with(|w| w.edit_mode));
    let edit_signal = Signal::from(edit_mode);
    let submitting = Signal::derive(move || ui.with(|u| u.submitting));
    let signed_in = move || auth.with(AuthState::is_authenticated);

    // Navigation lives in an effect so callbacks stay `Send + Sync`.
    let needs_login = RwSignal::new(false);
    let navigate = use_navigate();
    Effect::new(move || {
        if needs_login.get() {
            needs_login.set(false);
            navigate("/login", NavigateOptions::default());
        }
    });

    refresh(wall);

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if wall.with_untracked(WallState::should_poll) {
                    refresh(wall);
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Header actions.
    let on_toggle_edit = Callback::new(move |()| {
        let authenticated = auth.with_untracked(AuthState::is_authenticated);
        match wall.try_update(|w| w.toggle_edit(authenticated)) {
            Some(EditToggle::LoginRequired) => needs_login.set(true),
            Some(EditToggle::Exited) => refresh(wall),
            Some(EditToggle::Entered) | None => {}
        }
    });
    let on_add_image = Callback::new(move |()| ui.update(|u| u.open_modal(AddModal::Image)));
    let on_add_sticky = Callback::new(move |()| ui.update(|u| u.open_modal(AddModal::Sticky)));
    let on_logout = Callback::new(move |()| {
        let session = auth.with_untracked(|a| a.session.clone());
        session_store::clear_token();
        auth.update(AuthState::sign_out);
        wall.update(WallState::exit_edit);
        ui.update(UiState::close_modal);
        #[cfg(feature = "hydrate")]
        if let Some(session) = session {
            leptos::task::spawn_local(async move { api::logout(&session).await });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    });

    // Modal submissions.
    let close_modal = Callback::new(move |()| ui.update(UiState::close_modal));
    let settle_modal = move |ok: bool| {
        if ok {
            ui.update(UiState::close_modal);
        } else {
            ui.update(|u| u.submitting = false);
        }
    };
    let on_submit_image = Callback::new(move |submission: ImageSubmission| {
        ui.update(|u| u.submitting = true);
        run_mutation(
            auth,
            wall,
            "add image",
            move |session| async move {
                #[cfg(feature = "hydrate")]
                {
                    let uploaded = api::upload_image(&session, &submission.file).await?;
                    let item = NewItem::image(uploaded.url, submission.caption, position::random_position());
                    api::create_item(&session, &item).await
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (session, submission);
                    Err::<Item, String>(String::new())
                }
            },
            WallState::append_item,
            settle_modal,
        );
    });
    let on_submit_sticky = Callback::new(move |submission: StickySubmission| {
        ui.update(|u| u.submitting = true);
        let item = NewItem::sticky(submission.content, submission.background_color, position::random_position());
        run_mutation(
            auth,
            wall,
            "add note",
            move |session| async move {
                #[cfg(feature = "hydrate")]
                {
                    api::create_item(&session, &item).await
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (session, item);
                    Err::<Item, String>(String::new())
                }
            },
            WallState::append_item,
            settle_modal,
        );
    });

    // Item actions.
    let update = move |action: &'static str, item_id: String, changes: ItemUpdate| {
        run_mutation(
            auth,
            wall,
            action,
            move |session| async move {
                #[cfg(feature = "hydrate")]
                {
                    api::update_item(&session, &item_id, &changes).await
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (session, item_id, changes);
                    Err::<Item, String>(String::new())
                }
            },
            WallState::replace_item,
            |_| {},
        );
    };
    let actions = CardActions {
        open: Callback::new(move |image: LightboxImage| {
            let editing = edit_mode.get_untracked();
            ui.update(|u| {
                u.open_lightbox(image, editing);
            });
        }),
        update: Callback::new(move |(item_id, item_update): (String, ItemUpdate)| {
            update("update item", item_id, item_update);
        }),
        delete: Callback::new(move |item_id: String| {
            let removed_id = item_id.clone();
            run_mutation(
                auth,
                wall,
                "delete item",
                move |session| async move {
                    #[cfg(feature = "hydrate")]
                    {
                        api::delete_item(&session, &item_id).await
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = (session, item_id);
                        Err::<(), String>(String::new())
                    }
                },
                move |w, ()| w.remove_item(&removed_id),
                |_| {},
            );
        }),
        drop_on: Callback::new(move |target_id: String| {
            if let Some(moved) = wall.try_update(|w| w.drop_on(&target_id)).flatten() {
                let position_update = ItemUpdate { position: Some(moved.position), ..ItemUpdate::default() };
                update("move item", moved.source_id, position_update);
            }
        }),
    };

    let close_lightbox = Callback::new(move |()| ui.update(UiState::close_lightbox));

    view! {
        <div class="wall-page">
            <Header
                auth=auth
                edit_mode=edit_signal
                on_add_image=on_add_image
                on_add_sticky=on_add_sticky
                on_toggle_edit=on_toggle_edit
                on_logout=on_logout
            />

            {move || {
                wall.with(|w| w.error.clone())
                    .map(|message| {
                        view! {
                            <div class="wall-error" role="alert">
                                <span>{message}</span>
                                <button
                                    class="wall-error__dismiss"
                                    on:click=move |_| wall.update(WallState::dismiss_error)
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}

            <main class="wall-main">
                <Show
                    when=move || !wall.with(|w| w.loading)
                    fallback=|| view! { <p class="wall-status">"Loading..."</p> }
                >
                    <Show
                        when=move || !items.with(Vec::is_empty)
                        fallback=move || {
                            view! {
                                <div class="wall-empty">
                                    <h2>"Your Wall of Love is empty"</h2>
                                    <p>{move || empty_state_hint(signed_in())}</p>
                                    <Show when=signed_in>
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| on_add_image.run(())
                                        >
                                            "Add Your First Image"
                                        </button>
                                    </Show>
                                </div>
                            }
                        }
                    >
                        <div class="wall-grid" class:wall-grid--editing=move || edit_mode.get()>
                            <For
                                each=move || items.get()
                                key=render_key
                                children=move |item| item_cell(item, wall, edit_signal, actions)
                            />
                        </div>
                    </Show>
                </Show>
            </main>

            {move || match ui.with(|u| u.modal) {
                AddModal::Image => {
                    view! {
                        <AddImageModal
                            submitting=submitting
                            on_close=close_modal
                            on_submit=on_submit_image
                        />
                    }
                        .into_any()
                }
                AddModal::Sticky => {
                    view! {
                        <AddStickyModal
                            submitting=submitting
                            on_close=close_modal
                            on_submit=on_submit_sticky
                        />
                    }
                        .into_any()
                }
                AddModal::None => ().into_any(),
            }}

            {move || {
                ui.with(|u| u.lightbox.clone())
                    .map(|image| {
                        view! { <Lightbox url=image.url caption=image.caption on_close=close_lightbox /> }
                    })
            }}
        </div>
    }
}

/// One draggable grid cell wrapping the renderer for the item's kind.
fn item_cell(item: Item, wall: RwSignal<WallState>, edit_mode: Signal<bool>, actions: CardActions) -> impl IntoView {
    let id = StoredValue::new(item.id.clone());
    let card = match item.kind {
        ItemKind::Image => view! {
            <ImageCard
                item=item
                edit_mode=edit_mode
                on_open=actions.open
                on_update=actions.update
                on_delete=actions.delete
            />
        }
        .into_any(),
        ItemKind::Sticky => view! {
            <StickyNote
                item=item
                edit_mode=edit_mode
                on_update=actions.update
                on_delete=actions.delete
            />
        }
        .into_any(),
    };

    view! {
        <div
            class=move || id.with_value(|id| wall.with(|w| cell_class(id, w.dragging.as_deref())))
            draggable=move || if edit_mode.get() { "true" } else { "false" }
            on:dragstart=move |ev: leptos::ev::DragEvent| {
                if !edit_mode.get_untracked() {
                    ev.prevent_default();
                    return;
                }
                #[cfg(feature = "hydrate")]
                if let Some(transfer) = ev.data_transfer() {
                    let _ = id.with_value(|id| transfer.set_data("text/plain", id));
                }
                id.with_value(|id| wall.update(|w| w.start_drag(id)));
            }
            on:dragover=move |ev: leptos::ev::DragEvent| {
                if edit_mode.get_untracked() {
                    ev.prevent_default();
                }
            }
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                actions.drop_on.run(id.get_value());
            }
            on:dragend=move |_| wall.update(WallState::cancel_drag)
        >
            {card}
        </div>
    }
}
