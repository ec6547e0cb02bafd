//! Sidebar board list with selection and per-board vibe counts.
//!
//! DESIGN
//! ======
//! Selecting a board writes `ui.selected_board`; re-selecting the same board
//! is a pure idempotent write. The "All Vibes" entry clears the filter
//! (`selected_board = None`).

use leptos::prelude::*;

use crate::state::collection::CollectionState;
use crate::state::ui::UiState;

/// Selectable board inventory for the gallery sidebar.
#[component]
pub fn BoardList() -> impl IntoView {
    let collection = expect_context::<RwSignal<CollectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <aside class="board-list">
            <div class="board-list__header">
                <h2 class="board-list__heading">"Boards"</h2>
                <button
                    class="btn btn--primary board-list__new"
                    on:click=move |_| ui.update(|u| u.show_create_board = true)
                >
                    "+ New Board"
                </button>
            </div>

            <button
                class="board-list__item"
                class:board-list__item--selected=move || ui.get().selected_board.is_none()
                on:click=move |_| ui.update(|u| u.selected_board = None)
            >
                <span class="board-list__title">"All Vibes"</span>
                <span class="board-list__count">
                    {move || format!("{} vibes", collection.get().vibes.len())}
                </span>
            </button>

            {move || {
                collection
                    .get()
                    .boards
                    .into_iter()
                    .map(|board| {
                        let id = board.id.clone();
                        let select_id = board.id.clone();
                        let count = move || collection.get().vibe_count(&id);
                        let selected =
                            move || ui.get().selected_board.as_deref() == Some(select_id.as_str());
                        let on_select_id = board.id.clone();
                        view! {
                            <button
                                class="board-list__item"
                                class:board-list__item--selected=selected
                                on:click=move |_| {
                                    let id = on_select_id.clone();
                                    ui.update(|u| u.selected_board = Some(id));
                                }
                            >
                                <span class="board-list__title">{board.title}</span>
                                <span class="board-list__description">{board.description}</span>
                                <span class="board-list__count">
                                    {move || format!("{} vibes", count())}
                                </span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </aside>
    }
}
