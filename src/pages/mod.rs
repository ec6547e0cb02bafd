//! Route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` is the unauthenticated entry; `gallery` is the authenticated
//! landing route owning the seed transition and the derived filtered view.

pub mod gallery;
pub mod login;
