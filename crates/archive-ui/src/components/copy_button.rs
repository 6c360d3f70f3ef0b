use leptos::prelude::*;

use crate::feedback::Action;

/// A button that copies text to the clipboard and hands focus back to the
/// navbar search field.
/// Wired with an inline handler so it works on server-rendered pages.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Button label
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let onclick_js = Action::CopyText(text.clone()).onclick_js();

    view! {
        <button
            type="button"
            class="btn btn-sm btn-outline-secondary"
            title=text
            onclick=onclick_js
        >
            {label}
        </button>
    }
}
