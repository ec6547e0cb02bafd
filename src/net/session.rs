//! Session-provider client: identity fetch, login/logout, and the auth-state
//! subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session provider is an external service; this module is the only code
//! that talks to it. `subscribe` installs a cancellable subscription that
//! pushes `{ user, loading }` snapshots into `state::auth` — once immediately
//! and again whenever the provider reports a change (observed by polling).
//!
//! ERROR HANDLING
//! ==============
//! Identity fetch failures degrade to "no user" instead of surfacing errors;
//! login results are only ever observed through the subscription.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;

/// How often the subscription re-checks identity while alive.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_SECS: u64 = 30;

/// Disposer handle for an auth-state subscription.
///
/// Disposal is idempotent; after the first `dispose` every pending delivery
/// is dropped, so a callback fired by an in-flight poll can never mutate
/// state for a torn-down subscriber.
#[derive(Clone, Debug)]
pub struct SessionSubscription {
    alive: Arc<AtomicBool>,
}

impl SessionSubscription {
    fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Tear down the subscription. Returns `true` the first time only.
    pub fn dispose(&self) -> bool {
        self.alive.swap(false, Ordering::Relaxed)
    }

    pub fn is_disposed(&self) -> bool {
        !self.alive.load(Ordering::Relaxed)
    }

    /// Run `apply` only while the subscription is alive. Returns whether the
    /// delivery happened.
    pub fn deliver<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_disposed() {
            return false;
        }
        apply();
        true
    }
}

/// Subscribe `auth` to session-provider state changes.
///
/// Delivers the current (loading) snapshot immediately, then resolves the
/// identity and keeps polling while alive. The caller owns the returned
/// disposer and must run it on teardown (`on_cleanup`).
pub fn subscribe(auth: RwSignal<AuthState>) -> SessionSubscription {
    let subscription = SessionSubscription::new();
    subscription.deliver(|| {
        auth.update(|a| a.loading = true);
    });

    #[cfg(feature = "hydrate")]
    {
        let sub = subscription.clone();
        leptos::task::spawn_local(async move {
            loop {
                let user = fetch_current_user().await;
                let delivered = sub.deliver(|| {
                    auth.update(|a| {
                        a.user = user;
                        a.loading = false;
                    });
                });
                if !delivered {
                    break;
                }
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if sub.is_disposed() {
                    break;
                }
            }
        });
    }

    subscription
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Start the external hosted login flow. The result is observed only via the
/// subscription after the provider redirects back.
pub fn login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/api/auth/login");
        }
    }
}

/// Terminate the session by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}
