//! Single-line status region for loading, notice and error messages.

#[cfg(test)]
#[path = "status_message_test.rs"]
mod status_message_test;

use leptos::prelude::*;

use crate::state::recipes::UiStatus;

/// CSS classes for a status: `loading` and `error` are independent flavors
/// of the base `message` class.
pub fn status_class(status: &UiStatus) -> &'static str {
    if status.is_loading() {
        "message loading"
    } else if status.is_error_styled() {
        "message error"
    } else {
        "message"
    }
}

/// Renders one `UiStatus`. Used for the page-wide region and inside the
/// detail panel.
#[component]
pub fn StatusMessage(#[prop(into)] status: Signal<UiStatus>) -> impl IntoView {
    view! {
        <p class=move || status.with(status_class) role="status">
            {move || status.with(|s| s.message().to_owned())}
        </p>
    }
}
