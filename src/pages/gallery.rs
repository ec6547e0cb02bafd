//! Gallery page: board sidebar, filtered vibe listing, and creation dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It seeds the collection store on
//! the "no user" to "user present" transition, derives the filtered view from
//! store plus UI state, and hosts the create-board / create-vibe dialogs.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::board_list::BoardList;
use crate::components::toast_host::{ToastHost, notify_success};
use crate::components::toolbar::Toolbar;
use crate::components::vibe_card::VibeCard;
use crate::components::vibe_row::VibeRow;
use crate::state::auth::AuthState;
use crate::state::collection::{CollectionState, Vibe, filter_vibes};
use crate::state::toast::ToastState;
use crate::state::ui::{UiState, ViewMode};
use crate::util::time::now_ms;

/// Gallery page — sidebar, search-filtered vibe listing, creation dialogs.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let collection = expect_context::<RwSignal<CollectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Seed the store once, on the transition into an authenticated session.
    Effect::new(move || {
        if auth.get().user.is_none() {
            return;
        }
        if collection.get_untracked().seeded {
            return;
        }
        let mut default_board = None;
        collection.update(|c| default_board = c.seed(now_ms()));
        if let Some(id) = default_board {
            ui.update(|u| u.selected_board = Some(id));
        }
    });

    let filtered = Memo::new(move |_| {
        let state = collection.get();
        let ui_state = ui.get();
        filter_vibes(&state.vibes, ui_state.selected_board.as_deref(), &ui_state.search_query)
    });

    let heading = move || {
        ui.get()
            .selected_board
            .and_then(|id| collection.get().board_title(&id))
            .unwrap_or_else(|| "All Vibes".to_owned())
    };

    let searching = move || !ui.get().search_query.is_empty();

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="gallery-page">
                        <p>{move || {
                            if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                        }}</p>
                    </div>
                }
            }
        >
            <div class="gallery-page">
                <Toolbar/>

                <div class="gallery-page__layout">
                    <BoardList/>

                    <main class="gallery-page__main">
                        <div class="gallery-page__headline">
                            <div>
                                <h2 class="gallery-page__heading">{heading}</h2>
                                <p class="gallery-page__count">
                                    {move || format!("{} vibes collected", filtered.get().len())}
                                </p>
                            </div>
                            <button
                                class="btn btn--accent"
                                on:click=move |_| ui.update(|u| u.show_create_vibe = true)
                            >
                                "+ Add Vibe"
                            </button>
                        </div>

                        <Show
                            when=move || !filtered.get().is_empty()
                            fallback=move || {
                                view! {
                                    <div class="gallery-page__empty">
                                        <h3>"No vibes found"</h3>
                                        <p>
                                            {move || {
                                                if searching() {
                                                    "Try adjusting your search"
                                                } else {
                                                    "Start collecting inspiration by adding your first vibe"
                                                }
                                            }}
                                        </p>
                                        <button
                                            class="btn btn--accent"
                                            on:click=move |_| ui.update(|u| u.show_create_vibe = true)
                                        >
                                            "+ Add Your First Vibe"
                                        </button>
                                    </div>
                                }
                            }
                        >
                            {move || {
                                let vibes = filtered.get();
                                if ui.get().view_mode == ViewMode::Grid {
                                    view! { <VibeGrid vibes=vibes/> }.into_any()
                                } else {
                                    view! { <VibeListing vibes=vibes/> }.into_any()
                                }
                            }}
                        </Show>
                    </main>
                </div>

                <Show when=move || ui.get().show_create_board>
                    <CreateBoardDialog/>
                </Show>
                <Show when=move || ui.get().show_create_vibe>
                    <CreateVibeDialog/>
                </Show>
                <ToastHost/>
            </div>
        </Show>
    }
}

/// Card grid layout.
#[component]
fn VibeGrid(vibes: Vec<Vibe>) -> impl IntoView {
    view! {
        <div class="vibe-grid">
            {vibes
                .into_iter()
                .map(|vibe| view! { <VibeCard vibe=vibe/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Single-column row layout.
#[component]
fn VibeListing(vibes: Vec<Vibe>) -> impl IntoView {
    view! {
        <div class="vibe-listing">
            {vibes
                .into_iter()
                .map(|vibe| view! { <VibeRow vibe=vibe/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Modal dialog for creating a new board. Closing the dialog drops its
/// signals, so canceling discards entered data.
#[component]
fn CreateBoardDialog() -> impl IntoView {
    let collection = expect_context::<RwSignal<CollectionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let on_cancel = Callback::new(move |()| ui.update(|u| u.show_create_board = false));

    let submit = Callback::new(move |()| {
        // Empty trimmed title: silent no-op, nothing surfaced.
        if title.get().trim().is_empty() {
            return;
        }
        let mut created = None;
        collection.update(|c| {
            created = c.create_board(&title.get_untracked(), &description.get_untracked(), now_ms());
        });
        if created.is_some() {
            notify_success(toasts, "Board created!");
            ui.update(|u| u.show_create_board = false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Board"</h2>
                <label class="dialog__label">
                    "Board Title"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g., Minimalist Vibes"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        placeholder="Describe the mood or theme of this board..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create Board"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for adding a vibe, with optional image upload.
///
/// On upload failure the dialog stays open with all entered values retained,
/// so retry is a manual resubmit.
#[component]
fn CreateVibeDialog() -> impl IntoView {
    let collection = expect_context::<RwSignal<CollectionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_cancel = Callback::new(move |()| ui.update(|u| u.show_create_vibe = false));

    let submit = Callback::new(move |()| {
        // Empty trimmed title: silent no-op, nothing surfaced.
        if title.get().trim().is_empty() {
            return;
        }
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_host::notify_error;
            use crate::net::assets::{
                ASSET_NAMESPACE, ImageSource, destination_key, image_source_from_file,
                resolved_image_url, upload,
            };

            let selected_file = file_input.get_untracked().and_then(|input| {
                input.files().and_then(|files| files.get(0))
            });

            leptos::task::spawn_local(async move {
                // A supplied file that cannot be read aborts just like a
                // failed upload; only "no file selected" takes the default
                // image URL.
                let resolved = match selected_file {
                    Some(file) => match image_source_from_file(file).await {
                        Ok(ImageSource::File { bytes, filename }) => {
                            let key = destination_key(ASSET_NAMESPACE, now_ms(), &filename);
                            resolved_image_url(Some(upload(bytes, &key).await))
                        }
                        Ok(ImageSource::None) => resolved_image_url(None),
                        Err(e) => Err(e),
                    },
                    None => resolved_image_url(None),
                };

                let selected_board = ui.get_untracked().selected_board;
                let mut appended = Ok(None);
                collection.update(|c| {
                    appended = c.add_vibe_resolved(
                        &title.get_untracked(),
                        &description.get_untracked(),
                        &tags.get_untracked(),
                        resolved,
                        selected_board.as_deref(),
                        now_ms(),
                    );
                });
                if let Err(e) = appended {
                    // Store untouched; the form keeps its values for a
                    // manual retry.
                    log::warn!("image resolution failed: {e}");
                    notify_error(toasts, "Failed to upload image");
                    busy.set(false);
                    return;
                }
                notify_success(toasts, "Vibe added!");
                busy.set(false);
                ui.update(|u| u.show_create_vibe = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (collection, toasts);
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Vibe"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g., Scandinavian Interior"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        placeholder="Describe what makes this inspiring..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Tags"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="minimalist, cozy, nordic (comma separated)"
                        prop:value=move || tags.get()
                        on:input=move |ev| tags.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Image (optional)"
                    <input
                        class="dialog__input"
                        type="file"
                        accept="image/*"
                        node_ref=file_input
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--accent"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if busy.get() { "Uploading..." } else { "Add Vibe" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
