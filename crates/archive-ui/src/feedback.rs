//! Click feedback for the upload and search buttons and the navbar search
//! field helpers.

use crate::config::FeedbackConfig;
use crate::dom::{ElementHandle, Page, TextInput};
use crate::error::{Error, Result};
use crate::markup;

/// Holds a button's markup from before its spinner was shown.
pub const ORIGINAL_LABEL_ATTR: &str = "data-original-label";
/// Set once a button has its restore-on-hide listener.
pub const RESTORE_ON_HIDE_ATTR: &str = "data-restore-on-hide";

// ── Element-level helpers ─────────────────────────────────────────────────────

/// Replace the button content with a spinner and label and mark it disabled.
///
/// The class is cosmetic; the button still submits its form.
pub fn show_labelled_spinner<E: ElementHandle>(
    button: &E,
    spinner_class: &str,
    label: &str,
    disabled_class: &str,
) -> Result<()> {
    button.set_inner_html(&markup::labelled_spinner(spinner_class, label));
    button.add_class(disabled_class)
}

/// Replace the button content with a bare spinner, remembering what it
/// showed before so [`restore_label`] can put it back.
pub fn show_spinner<E: ElementHandle>(button: &E, spinner_class: &str) -> Result<()> {
    // A second click must not record the spinner as the original label.
    if button.attribute(ORIGINAL_LABEL_ATTR).is_none() {
        button.set_attribute(ORIGINAL_LABEL_ATTR, &button.inner_html())?;
    }
    button.set_inner_html(&markup::padded_spinner(spinner_class));
    Ok(())
}

/// Put back the markup saved by [`show_spinner`]. Returns whether anything
/// was restored.
pub fn restore_label<E: ElementHandle>(button: &E) -> Result<bool> {
    let Some(original) = button.attribute(ORIGINAL_LABEL_ATTR) else {
        return Ok(false);
    };
    button.set_inner_html(&original);
    button.remove_attribute(ORIGINAL_LABEL_ATTR)?;
    Ok(true)
}

/// Set the value and select all of it, ready to be typed over.
pub fn fill_and_select<I: TextInput>(input: &I, value: &str) {
    input.set_value(value);
    input.select();
}

pub fn focus_and_select<I: TextInput>(input: &I) -> Result<()> {
    input.focus()?;
    input.select();
    Ok(())
}

// ── Page-level operations ─────────────────────────────────────────────────────

/// The helpers bound to one page and one configuration.
pub struct Feedback<P> {
    page: P,
    config: FeedbackConfig,
}

impl<P: Page> Feedback<P> {
    pub fn new(page: P, config: FeedbackConfig) -> Self {
        Self { page, config }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Spinner plus "uploading" label on the upload button.
    pub fn show_upload_spinner(&self) -> Result<()> {
        let id = &self.config.ids.upload_button;
        let button = self.page.element(id)?;
        show_labelled_spinner(
            &button,
            &self.config.classes.spinner,
            &self.config.labels.uploading,
            &self.config.classes.disabled,
        )?;
        log::debug!("Upload spinner shown on #{}", id);
        Ok(())
    }

    /// Bare spinner on the search button, undone when the page is hidden.
    ///
    /// Going back through history after a search restores the page from the
    /// cache with the spinner still showing, so the label is put back as soon
    /// as the page is left.
    pub fn show_search_spinner(&self) -> Result<()> {
        let id = &self.config.ids.search_button;
        let button = self.page.element(id)?;

        // Guard first, so a spinner is never left without its reset.
        if button.attribute(RESTORE_ON_HIDE_ATTR).is_none() {
            let target = button.clone();
            let target_id = id.clone();
            self.page.on_hidden(Box::new(move || match restore_label(&target) {
                Ok(true) => log::debug!("Restored #{} label on page hide", target_id),
                Ok(false) => {}
                Err(e) => log::error!("Failed to restore #{} label: {}", target_id, e),
            }))?;
            button.set_attribute(RESTORE_ON_HIDE_ATTR, "")?;
        }
        show_spinner(&button, &self.config.classes.spinner)?;
        log::debug!("Search spinner shown on #{}", id);
        Ok(())
    }

    /// Copy `value` to the clipboard and hand focus back to the search field.
    ///
    /// The search field is optional here; pages without a navbar still copy.
    pub fn copy_text(&self, value: &str) -> Result<()> {
        self.page.write_clipboard(value)?;
        match self.page.input(&self.config.ids.search_input) {
            Ok(input) => input.focus(),
            Err(Error::NotFound { id }) => {
                log::debug!("No #{} to focus after copy", id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub fn search_text(&self, value: &str) -> Result<()> {
        let input = self.page.input(&self.config.ids.search_input)?;
        fill_and_select(&input, value);
        Ok(())
    }

    pub fn select_search_input_text(&self) -> Result<()> {
        let input = self.page.input(&self.config.ids.search_input)?;
        focus_and_select(&input)
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// One click-triggered helper call, as bound from markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowUploadSpinner,
    ShowSearchSpinner,
    CopyText(String),
    SearchText(String),
    SelectSearchInputText,
}

impl Action {
    /// Name the action is exported under to page scripts.
    pub fn js_name(&self) -> &'static str {
        match self {
            Action::ShowUploadSpinner => "showUploadSpinner",
            Action::ShowSearchSpinner => "showSearchSpinner",
            Action::CopyText(_) => "copyText",
            Action::SearchText(_) => "searchText",
            Action::SelectSearchInputText => "selectSearchInputText",
        }
    }

    pub fn apply<P: Page>(&self, feedback: &Feedback<P>) -> Result<()> {
        match self {
            Action::ShowUploadSpinner => feedback.show_upload_spinner(),
            Action::ShowSearchSpinner => feedback.show_search_spinner(),
            Action::CopyText(value) => feedback.copy_text(value),
            Action::SearchText(value) => feedback.search_text(value),
            Action::SelectSearchInputText => feedback.select_search_input_text(),
        }
    }

    /// Inline `onclick` handler calling the exported function, for
    /// server-rendered markup. String arguments are JS-escaped; attribute
    /// escaping is left to the renderer.
    pub fn onclick_js(&self) -> String {
        match self {
            Action::CopyText(value) | Action::SearchText(value) => {
                format!("{}({})", self.js_name(), markup::js_string(value))
            }
            _ => format!("{}()", self.js_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryPage;
    use crate::markup::visible_text;

    const SPINNER: &str = "spinner-border spinner-border-sm";

    fn navbar_page() -> MemoryPage {
        let page = MemoryPage::new();
        page.add_element("upload-button", "アップロード");
        page.add_element("search-button", "検索");
        page.add_input("search-input-field", "");
        page
    }

    fn feedback(page: &MemoryPage) -> Feedback<MemoryPage> {
        Feedback::new(page.clone(), FeedbackConfig::default())
    }

    #[test]
    fn upload_spinner_shows_label_and_disabled_class() {
        let page = navbar_page();
        feedback(&page).show_upload_spinner().unwrap();

        let button = page.element("upload-button").unwrap();
        assert!(markup::shows_spinner(&button.inner_html(), SPINNER));
        assert_eq!(visible_text(&button.inner_html()), "アップロード中");
        assert!(button.has_class("disabled"));
    }

    #[test]
    fn upload_spinner_is_idempotent() {
        let page = navbar_page();
        let fb = feedback(&page);
        fb.show_upload_spinner().unwrap();
        let first = page.element("upload-button").unwrap().inner_html();
        fb.show_upload_spinner().unwrap();

        let button = page.element("upload-button").unwrap();
        assert_eq!(button.inner_html(), first);
        assert_eq!(button.classes(), vec!["disabled".to_string()]);
    }

    #[test]
    fn search_spinner_has_no_text() {
        let page = navbar_page();
        feedback(&page).show_search_spinner().unwrap();

        let html = page.element("search-button").unwrap().inner_html();
        assert!(markup::shows_spinner(&html, SPINNER));
        assert_eq!(visible_text(&html), "");
    }

    #[test]
    fn hiding_page_restores_search_label_exactly() {
        let page = navbar_page();
        let button = page.element("search-button").unwrap();
        button.set_inner_html("<i class=\"bi bi-search\"></i>&nbsp;検索");

        feedback(&page).show_search_spinner().unwrap();
        page.hide();

        assert_eq!(button.inner_html(), "<i class=\"bi bi-search\"></i>&nbsp;検索");
        assert_eq!(button.attribute(ORIGINAL_LABEL_ATTR), None);
    }

    #[test]
    fn repeated_search_clicks_keep_first_label_and_one_listener() {
        let page = navbar_page();
        let fb = feedback(&page);
        fb.show_search_spinner().unwrap();
        fb.show_search_spinner().unwrap();
        fb.show_search_spinner().unwrap();

        assert_eq!(page.hidden_listener_count(), 1);
        page.hide();
        assert_eq!(page.element("search-button").unwrap().inner_html(), "検索");
    }

    #[test]
    fn search_spinner_works_again_after_restore() {
        let page = navbar_page();
        let fb = feedback(&page);
        fb.show_search_spinner().unwrap();
        page.hide();
        page.show();

        fb.show_search_spinner().unwrap();
        let button = page.element("search-button").unwrap();
        assert!(markup::shows_spinner(&button.inner_html(), SPINNER));
        page.hide();
        assert_eq!(button.inner_html(), "検索");
        assert_eq!(page.hidden_listener_count(), 1);
    }

    #[test]
    fn hiding_without_spinner_leaves_label_alone() {
        let page = navbar_page();
        let button = page.element("search-button").unwrap();
        assert!(!restore_label(&button).unwrap());
        page.hide();
        assert_eq!(button.inner_html(), "検索");
    }

    #[test]
    fn copy_text_writes_clipboard_and_focuses_search() {
        let page = navbar_page();
        feedback(&page).copy_text("abc").unwrap();
        assert_eq!(page.clipboard().as_deref(), Some("abc"));
        assert_eq!(page.focused().as_deref(), Some("search-input-field"));
    }

    #[test]
    fn copy_text_without_search_field_still_copies() {
        let page = MemoryPage::new();
        feedback(&page).copy_text("訳語").unwrap();
        assert_eq!(page.clipboard().as_deref(), Some("訳語"));
        assert_eq!(page.focused(), None);
    }

    #[test]
    fn search_text_fills_and_selects() {
        let page = navbar_page();
        feedback(&page).search_text("foo").unwrap();

        let input = page.input("search-input-field").unwrap();
        assert_eq!(input.value(), "foo");
        assert_eq!(input.selection(), 0..3);
    }

    #[test]
    fn select_search_input_text_keeps_value() {
        let page = navbar_page();
        let input = page.input("search-input-field").unwrap();
        input.set_value("glossary");

        feedback(&page).select_search_input_text().unwrap();
        assert_eq!(input.value(), "glossary");
        assert_eq!(input.selection(), 0..8);
        assert!(input.is_focused());
    }

    #[test]
    fn missing_elements_are_reported() {
        let page = MemoryPage::new();
        let fb = feedback(&page);
        assert_eq!(
            fb.show_upload_spinner().unwrap_err(),
            Error::NotFound { id: "upload-button".into() }
        );
        assert_eq!(
            fb.show_search_spinner().unwrap_err(),
            Error::NotFound { id: "search-button".into() }
        );
        assert_eq!(
            fb.search_text("x").unwrap_err(),
            Error::NotFound { id: "search-input-field".into() }
        );
        assert!(fb.select_search_input_text().is_err());
    }

    #[test]
    fn configured_ids_and_label_are_used() {
        let page = MemoryPage::new();
        let button = page.add_element("translation-upload", "Upload");
        let config = FeedbackConfig::from_toml_str(
            "[ids]\nupload_button = \"translation-upload\"\n[labels]\nuploading = \"Uploading\"",
        )
        .unwrap();

        Feedback::new(page.clone(), config).show_upload_spinner().unwrap();
        assert_eq!(visible_text(&button.inner_html()), "Uploading");
    }

    #[test]
    fn actions_apply_their_operation() {
        let page = navbar_page();
        let fb = feedback(&page);
        Action::SearchText("term".into()).apply(&fb).unwrap();
        Action::CopyText("term".into()).apply(&fb).unwrap();

        assert_eq!(page.clipboard().as_deref(), Some("term"));
        assert_eq!(page.input("search-input-field").unwrap().value(), "term");
        assert_eq!(Action::SelectSearchInputText.js_name(), "selectSearchInputText");
    }

    #[test]
    fn feedback_exposes_its_page_and_config() {
        let page = navbar_page();
        let fb = feedback(&page);
        assert_eq!(fb.config().ids.search_button, "search-button");

        fb.show_search_spinner().unwrap();
        fb.page().hide();
        assert!(page.is_hidden());
        assert_eq!(page.element("search-button").unwrap().inner_html(), "検索");
    }

    /// A page whose visibility listeners cannot be registered.
    struct NoVisibilityEvents(MemoryPage);

    impl Page for NoVisibilityEvents {
        type Element = <MemoryPage as Page>::Element;
        type Input = <MemoryPage as Page>::Input;

        fn element(&self, id: &str) -> Result<Self::Element> {
            self.0.element(id)
        }

        fn input(&self, id: &str) -> Result<Self::Input> {
            self.0.input(id)
        }

        fn write_clipboard(&self, text: &str) -> Result<()> {
            self.0.write_clipboard(text)
        }

        fn on_hidden(&self, _callback: Box<dyn Fn()>) -> Result<()> {
            Err(Error::Dom("addEventListener rejected".to_string()))
        }
    }

    #[test]
    fn search_spinner_not_shown_without_reset_listener() {
        let page = navbar_page();
        let fb = Feedback::new(NoVisibilityEvents(page.clone()), FeedbackConfig::default());

        assert!(matches!(fb.show_search_spinner(), Err(Error::Dom(_))));
        let button = page.element("search-button").unwrap();
        assert_eq!(button.inner_html(), "検索");
        assert_eq!(button.attribute(ORIGINAL_LABEL_ATTR), None);
        assert_eq!(button.attribute(RESTORE_ON_HIDE_ATTR), None);
    }

    #[test]
    fn onclick_handlers_call_exported_names() {
        assert_eq!(Action::ShowUploadSpinner.onclick_js(), "showUploadSpinner()");
        assert_eq!(Action::ShowSearchSpinner.onclick_js(), "showSearchSpinner()");
        assert_eq!(Action::SelectSearchInputText.onclick_js(), "selectSearchInputText()");
        assert_eq!(Action::CopyText("abc".into()).onclick_js(), r#"copyText("abc")"#);
        assert_eq!(
            Action::SearchText(r#"say "hi""#.into()).onclick_js(),
            r#"searchText("say \"hi\"")"#
        );
    }
}
