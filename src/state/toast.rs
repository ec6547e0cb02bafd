//! Transient notification queue ("Board created!", upload failures).
//!
//! DESIGN
//! ======
//! The queue is plain data with a monotonic id counter; timing (auto-dismiss)
//! lives in the `ToastHost` component so the queue itself stays testable on
//! the host.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toast queue. Ids increase monotonically for the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id (used to schedule auto-dismiss).
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn push_success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn push_error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Remove a toast by id. Unknown ids are ignored (the toast may have
    /// been dismissed by click before its timer fired).
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
