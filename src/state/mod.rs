//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `collection`, `toast`, `ui`) so
//! individual components can depend on small focused models. Structs here are
//! plain data; pages wrap them in `RwSignal` context providers.

pub mod auth;
pub mod collection;
pub mod toast;
pub mod ui;
