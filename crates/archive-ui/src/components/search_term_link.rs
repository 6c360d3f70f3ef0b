use leptos::prelude::*;

use crate::feedback::Action;

/// A term that, when clicked, is put into the search field ready to submit.
#[component]
pub fn SearchTermLink(#[prop(into)] term: String) -> impl IntoView {
    // `return false` keeps the `#` href from scrolling the page.
    let onclick_js = format!("{}; return false;", Action::SearchText(term.clone()).onclick_js());

    view! {
        <a href="#" class="search-term" onclick=onclick_js>
            {term}
        </a>
    }
}
