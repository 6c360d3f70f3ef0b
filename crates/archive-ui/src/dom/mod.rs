//! The slice of the DOM the helpers touch.
//!
//! Handles are cheap clones that refer to the same live node, like
//! `web_sys::Element` does.

pub mod memory;

use crate::error::Result;

/// A button or any other element whose markup gets swapped.
pub trait ElementHandle: Clone + 'static {
    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);
    /// Add one class token. Adding a class twice is a no-op.
    fn add_class(&self, class: &str) -> Result<()>;
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;
    fn remove_attribute(&self, name: &str) -> Result<()>;
}

/// A text `<input>`.
pub trait TextInput {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn focus(&self) -> Result<()>;
    /// Select the whole value.
    fn select(&self);
}

/// One loaded page.
pub trait Page {
    type Element: ElementHandle;
    type Input: TextInput;

    /// Look up an element by id, failing with `NotFound` when absent.
    fn element(&self, id: &str) -> Result<Self::Element>;

    /// Look up a text input by id.
    fn input(&self, id: &str) -> Result<Self::Input>;

    /// Start a clipboard write without waiting for it to finish.
    fn write_clipboard(&self, text: &str) -> Result<()>;

    /// Run `callback` every time the page becomes hidden, for the rest of the
    /// page's lifetime.
    fn on_hidden(&self, callback: Box<dyn Fn()>) -> Result<()>;
}
