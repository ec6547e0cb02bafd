//! Toast rendering plus the timed auto-dismiss glue.
//!
//! DESIGN
//! ======
//! The queue itself is plain data (`state::toast`); this component owns the
//! browser-only timing so notify helpers can be called from any event
//! handler.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays up before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_DURATION_SECS: u64 = 4;

/// Push a success toast and schedule its dismissal.
pub fn notify_success(toasts: RwSignal<ToastState>, message: &str) {
    let mut id = 0;
    toasts.update(|t| id = t.push_success(message));
    schedule_dismiss(toasts, id);
}

/// Push an error toast and schedule its dismissal.
pub fn notify_error(toasts: RwSignal<ToastState>, message: &str) {
    let mut id = 0;
    toasts.update(|t| id = t.push_error(message));
    schedule_dismiss(toasts, id);
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_DURATION_SECS)).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id);
    }
}

/// Fixed overlay rendering the queued toasts; click dismisses early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let kind_class = match toast.kind {
                            ToastKind::Success => "toast--success",
                            ToastKind::Error => "toast--error",
                        };
                        view! {
                            <button
                                class=format!("toast {kind_class}")
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
