//! List-mode row for a single vibe.

use leptos::prelude::*;

use crate::state::collection::Vibe;

/// Thumbnail row showing the full tag list and up to four swatches.
#[component]
pub fn VibeRow(vibe: Vibe) -> impl IntoView {
    let swatches: Vec<String> = vibe.colors.iter().take(4).cloned().collect();

    view! {
        <article class="vibe-row">
            <img class="vibe-row__thumbnail" src=vibe.image_url alt=vibe.title.clone()/>
            <div class="vibe-row__body">
                <h3 class="vibe-row__title">{vibe.title}</h3>
                <p class="vibe-row__description">{vibe.description}</p>
                <div class="vibe-row__meta">
                    <div class="vibe-row__tags">
                        {vibe
                            .tags
                            .into_iter()
                            .map(|tag| view! { <span class="badge">{tag}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="vibe-row__swatches">
                        {swatches
                            .into_iter()
                            .map(|color| {
                                view! {
                                    <span
                                        class="vibe-row__swatch"
                                        style=format!("background-color: {color}")
                                    ></span>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </article>
    }
}
