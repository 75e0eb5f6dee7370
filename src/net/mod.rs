//! Networking modules for the recipe catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the upstream wire schema, `api` performs the HTTP calls,
//! `error` classifies their failures, and `dispatch` drives one user action
//! through the shared state and a single catalog request.

pub mod api;
pub mod dispatch;
pub mod error;
pub mod types;
