//! Catalog request failures.
//!
//! ERROR HANDLING
//! ==============
//! Variants exist for logging only. Every variant collapses into the same
//! per-call-site message once it reaches `RecipeState`; an empty result is
//! never represented here.

/// Why a catalog request produced no usable body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never completed (offline, DNS, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The catalog answered with a non-2xx status.
    #[error("catalog responded with status {0}")]
    Status(u16),

    /// The body was not the expected `{ "meals": ... }` JSON.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Catalog calls only run in the browser build.
    #[error("catalog requests are not available on the server")]
    Unavailable,
}
