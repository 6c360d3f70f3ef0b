use leptos::prelude::*;

use crate::config::{SEARCH_BUTTON_ID, SEARCH_INPUT_ID};
use crate::feedback::Action;

/// Navbar search form.
///
/// The ids must match `ids.search_input` and `ids.search_button` of the
/// active config.
#[component]
pub fn SearchForm(
    /// Where the query is submitted (GET)
    #[prop(into)]
    action: String,
    #[prop(into)] placeholder: String,
    /// Current query, echoed back into the field
    #[prop(optional, into)]
    query: String,
    #[prop(into, default = "検索".to_string())] button_label: String,
    #[prop(into, default = SEARCH_INPUT_ID.to_string())] input_id: String,
    #[prop(into, default = SEARCH_BUTTON_ID.to_string())] button_id: String,
) -> impl IntoView {
    view! {
        <form action=action method="get" class="d-flex" role="search">
            <input
                id=input_id
                type="search"
                name="query"
                class="form-control me-2"
                placeholder=placeholder
                value=query
                onclick=Action::SelectSearchInputText.onclick_js()
            />
            <button
                id=button_id
                type="submit"
                class="btn btn-outline-light"
                onclick=Action::ShowSearchSpinner.onclick_js()
            >
                {button_label}
            </button>
        </form>
    }
}
