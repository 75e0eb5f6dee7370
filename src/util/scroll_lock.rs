//! Page scroll lock while the detail overlay is open.
//!
//! Sets `overflow: hidden` on `<body>` when locked and clears the inline
//! value when released. Requires a browser environment; SSR is a no-op.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Inline `overflow` value for the body.
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "" }
}

/// Apply or release the body scroll lock.
pub fn set_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = body.style().set_property("overflow", overflow_value(locked));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
