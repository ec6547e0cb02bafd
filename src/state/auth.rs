//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the session-provider subscription (`net::session`) and read by
//! route guards and identity-dependent rendering (header greeting, login
//! redirect).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts in the loading phase: the subscription delivers the resolved
    /// identity asynchronously after its initial snapshot.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}
