//! Top bar with app identity, live search, view-mode toggle, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search box and view toggle write UI-local state only; filtering is
//! derived reactively in the gallery page from that state.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{UiState, ViewMode};

/// Gallery header toolbar.
#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome back".to_owned(), |user| format!("Welcome back, {}", user.email))
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::session::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__logo" aria-hidden="true">"🎨"</span>
            <div class="toolbar__identity">
                <span class="toolbar__title">"Vibe Collector"</span>
                <span class="toolbar__greeting">{greeting}</span>
            </div>

            <span class="toolbar__spacer"></span>

            <input
                class="toolbar__search"
                type="search"
                placeholder="Search vibes, tags..."
                prop:value=move || ui.get().search_query
                on:input=move |ev| {
                    ui.update(|u| u.search_query = event_target_value(&ev));
                }
            />

            <div class="toolbar__view-toggle" role="group" aria-label="View mode">
                <button
                    class="btn toolbar__view-btn"
                    class:btn--active=move || ui.get().view_mode == ViewMode::Grid
                    on:click=move |_| ui.update(|u| u.view_mode = ViewMode::Grid)
                    title="Grid view"
                >
                    "▦"
                </button>
                <button
                    class="btn toolbar__view-btn"
                    class:btn--active=move || ui.get().view_mode == ViewMode::List
                    on:click=move |_| ui.update(|u| u.view_mode = ViewMode::List)
                    title="List view"
                >
                    "☰"
                </button>
            </div>

            <button class="btn toolbar__logout" on:click=on_logout title="Sign out">
                "Sign Out"
            </button>
        </header>
    }
}
