//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render gallery chrome and vibe presentation while
//! reading/writing shared state from Leptos context providers.

pub mod board_list;
pub mod toast_host;
pub mod toolbar;
pub mod vibe_card;
pub mod vibe_row;
