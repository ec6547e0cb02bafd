//! Sign-in page delegating to the external session provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::session;
use crate::state::auth::AuthState;

/// Branded sign-in hero. Redirects home once a user is present.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| {
                view! {
                    <div class="login-page">
                        <div class="spinner" aria-label="Loading"></div>
                        <p class="login-page__loading">"Loading your vibes..."</p>
                    </div>
                }
            }
        >
            <div class="login-page">
                <div class="login-page__hero">
                    <span class="login-page__logo" aria-hidden="true">"🎨"</span>
                    <h1 class="login-page__title">"Vibe Collector"</h1>
                    <p class="login-page__tagline">
                        "Collect and organize your creative inspiration in beautiful mood boards"
                    </p>
                    <button class="btn btn--primary login-page__cta" on:click=move |_| session::login()>
                        "Sign In to Start Collecting"
                    </button>
                </div>
            </div>
        </Show>
    }
}
