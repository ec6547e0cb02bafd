//! Root application component with routing, context providers, and the
//! session-provider subscription lifecycle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::session;
use crate::pages::{gallery::GalleryPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::collection::CollectionState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, installs the auth subscription for
/// the app's lifetime, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let collection = RwSignal::new(CollectionState::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(collection);
    provide_context(toasts);
    provide_context(ui);

    // The subscription lives as long as the app; the disposer runs exactly
    // once on teardown, after which late callbacks are ignored.
    let subscription = session::subscribe(auth);
    on_cleanup(move || {
        subscription.dispose();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vibe-collector.css"/>
        <Title text="Vibe Collector"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=GalleryPage/>
            </Routes>
        </Router>
    }
}
