//! Grid-mode card for a single vibe.

use leptos::prelude::*;

use crate::state::collection::Vibe;

/// How many tag badges a card shows before collapsing into a "+N" badge.
const VISIBLE_TAGS: usize = 3;

/// Image card with color swatches and tag badges.
#[component]
pub fn VibeCard(vibe: Vibe) -> impl IntoView {
    let overflow = vibe.tags.len().saturating_sub(VISIBLE_TAGS);
    let visible_tags: Vec<String> = vibe.tags.iter().take(VISIBLE_TAGS).cloned().collect();
    let swatches: Vec<String> = vibe.colors.iter().take(3).cloned().collect();

    view! {
        <article class="vibe-card">
            <div class="vibe-card__media">
                <img class="vibe-card__image" src=vibe.image_url alt=vibe.title.clone()/>
                <div class="vibe-card__swatches">
                    {swatches
                        .into_iter()
                        .map(|color| {
                            view! {
                                <span
                                    class="vibe-card__swatch"
                                    style=format!("background-color: {color}")
                                ></span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="vibe-card__body">
                <h3 class="vibe-card__title">{vibe.title}</h3>
                <p class="vibe-card__description">{vibe.description}</p>
                <div class="vibe-card__tags">
                    {visible_tags
                        .into_iter()
                        .map(|tag| view! { <span class="badge">{tag}</span> })
                        .collect::<Vec<_>>()}
                    <Show when={move || overflow > 0}>
                        <span class="badge badge--outline">{format!("+{overflow}")}</span>
                    </Show>
                </div>
            </div>
        </article>
    }
}
