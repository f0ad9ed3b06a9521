//! Wall header: title, add buttons, edit toggle, share, and session controls.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::util::notify;

#[component]
pub fn Header(
    auth: RwSignal<AuthState>,
    edit_mode: Signal<bool>,
    on_add_image: Callback<()>,
    on_add_sticky: Callback<()>,
    on_toggle_edit: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let signed_in = move || auth.with(AuthState::is_authenticated);
    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <header class="wall-header">
            <h1 class="wall-header__title">"Wall of Love ❤️"</h1>
            <span class="wall-header__spacer"></span>
            <Show when=signed_in>
                <button class="btn wall-header__add" on:click=move |_| on_add_image.run(())>
                    "Add Image"
                </button>
                <button class="btn wall-header__add" on:click=move |_| on_add_sticky.run(())>
                    "Add Note"
                </button>
            </Show>
            <button
                class=move || if edit_mode.get() { "btn wall-header__mode wall-header__mode--edit" } else { "btn wall-header__mode" }
                on:click=move |_| on_toggle_edit.run(())
            >
                {move || if edit_mode.get() { "Edit Mode" } else { "View Mode" }}
            </button>
            <button class="btn wall-header__share" on:click=move |_| notify::copy_share_link()>
                "Copy Share Link"
            </button>
            <Show
                when=signed_in
                fallback=|| view! { <A href="/login" attr:class="btn btn--primary">"Login"</A> }
            >
                <span class="wall-header__user">{user_name}</span>
                <button class="btn wall-header__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
