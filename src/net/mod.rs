//! Thin clients for the two external collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` talks to the identity/auth service and feeds `state::auth`
//! through a cancellable subscription; `assets` uploads binary payloads and
//! returns public URLs; `types` defines the shared wire schema.

pub mod assets;
pub mod session;
pub mod types;
