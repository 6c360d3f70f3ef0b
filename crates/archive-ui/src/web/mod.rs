//! Browser backend over web-sys.

pub mod bindings;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlInputElement, VisibilityState};

use crate::config::FeedbackConfig;
use crate::dom::{ElementHandle, Page, TextInput};
use crate::error::{Error, Result};
use crate::feedback::{Action, Feedback};

thread_local! {
    static CONFIG: RefCell<FeedbackConfig> = RefCell::new(FeedbackConfig::default());
}

fn dom_error(value: JsValue) -> Error {
    Error::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[derive(Debug, Clone)]
pub struct WebElement(web_sys::Element);

impl ElementHandle for WebElement {
    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.0.class_list().add_1(class).map_err(dom_error)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.0.set_attribute(name, value).map_err(dom_error)
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.0.remove_attribute(name).map_err(dom_error)
    }
}

#[derive(Debug, Clone)]
pub struct WebInput(HtmlInputElement);

impl TextInput for WebInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }

    fn focus(&self) -> Result<()> {
        self.0.focus().map_err(dom_error)
    }

    fn select(&self) {
        self.0.select();
    }
}

/// The document of the current window.
#[derive(Debug, Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::Dom("no window document".to_string()))?;
        Ok(Self { document })
    }
}

impl Page for WebPage {
    type Element = WebElement;
    type Input = WebInput;

    fn element(&self, id: &str) -> Result<WebElement> {
        self.document
            .get_element_by_id(id)
            .map(WebElement)
            .ok_or_else(|| Error::not_found(id))
    }

    fn input(&self, id: &str) -> Result<WebInput> {
        let element = self.document.get_element_by_id(id).ok_or_else(|| Error::not_found(id))?;
        element
            .dyn_into::<HtmlInputElement>()
            .map(WebInput)
            .map_err(|_| Error::WrongElementType {
                id: id.to_string(),
                expected: "an <input>",
            })
    }

    fn write_clipboard(&self, text: &str) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Dom("no window".to_string()))?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::error!("Clipboard write failed: {:?}", e);
            }
        });
        Ok(())
    }

    fn on_hidden(&self, callback: Box<dyn Fn()>) -> Result<()> {
        let document = self.document.clone();
        let listener = Closure::wrap(Box::new(move || {
            if document.visibility_state() == VisibilityState::Hidden {
                callback();
            }
        }) as Box<dyn FnMut()>);

        self.document
            .add_event_listener_with_callback("visibilitychange", listener.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // Lives as long as the page.
        listener.forget();
        Ok(())
    }
}

/// Replace the configuration used by every later call.
pub fn set_config(config: FeedbackConfig) {
    CONFIG.with(|c| *c.borrow_mut() = config);
}

pub fn with_feedback<T>(op: impl FnOnce(&Feedback<WebPage>) -> Result<T>) -> Result<T> {
    let page = WebPage::current()?;
    let config = CONFIG.with(|c| c.borrow().clone());
    op(&Feedback::new(page, config))
}

/// Apply `action` to the current page, logging instead of propagating.
pub fn run(action: &Action) {
    if let Err(e) = with_feedback(|feedback| action.apply(feedback)) {
        log::error!("{} failed: {}", action.js_name(), e);
    }
}
