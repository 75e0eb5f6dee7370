//! Search form plus the random-recipe button.

use leptos::prelude::*;

/// Search input and controls. The raw input is handed to `on_search`
/// untrimmed; blank-term handling belongs to the dispatcher.
#[component]
pub fn SearchBar(on_search: Callback<String>, on_random: Callback<()>) -> impl IntoView {
    let term = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(term.get_untracked());
    };

    view! {
        <div class="search-bar">
            <form id="search-form" class="search-bar__form" on:submit=on_submit>
                <input
                    id="search-input"
                    class="search-bar__input"
                    type="text"
                    placeholder="Search recipes, e.g. chicken, pasta"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Search"
                </button>
            </form>
            <button id="random-button" class="btn" on:click=move |_| on_random.run(())>
                "Surprise Me"
            </button>
        </div>
    }
}
