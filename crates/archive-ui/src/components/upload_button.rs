use leptos::prelude::*;

use crate::config::UPLOAD_BUTTON_ID;
use crate::feedback::Action;

/// Submit button of the glossary and translation upload forms.
///
/// Clicking swaps the label for a spinner; the form still submits.
#[component]
pub fn UploadButton(
    #[prop(into)] label: String,
    /// Must match `ids.upload_button` of the active config
    #[prop(into, default = UPLOAD_BUTTON_ID.to_string())]
    id: String,
) -> impl IntoView {
    view! {
        <button
            id=id
            type="submit"
            class="btn btn-primary"
            onclick=Action::ShowUploadSpinner.onclick_js()
        >
            {label}
        </button>
    }
}
