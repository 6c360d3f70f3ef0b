//! In-memory page for running the helpers without a browser.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::ops::Range;
use std::rc::Rc;

use super::{ElementHandle, Page, TextInput};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
struct ElementState {
    inner_html: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }
}

impl ElementHandle for MemoryElement {
    fn inner_html(&self) -> String {
        self.state.borrow().inner_html.clone()
    }

    fn set_inner_html(&self, html: &str) {
        self.state.borrow_mut().inner_html = html.to_string();
    }

    fn add_class(&self, class: &str) -> Result<()> {
        if class.is_empty() || class.contains(char::is_whitespace) {
            return Err(Error::Dom(format!("invalid class token '{class}'")));
        }
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.state.borrow_mut().attributes.remove(name);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct InputState {
    value: String,
    /// In UTF-16 code units, as `selectionStart`/`selectionEnd` report it.
    selection: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct MemoryInput {
    id: String,
    state: Rc<RefCell<InputState>>,
    focused: Rc<RefCell<Option<String>>>,
}

impl MemoryInput {
    pub fn selection(&self) -> Range<usize> {
        self.state.borrow().selection.clone()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.borrow().as_deref() == Some(self.id.as_str())
    }
}

impl TextInput for MemoryInput {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.value = value.to_string();
        // Browsers park the caret at the end after a programmatic change.
        let end = utf16_len(value);
        state.selection = end..end;
    }

    fn focus(&self) -> Result<()> {
        *self.focused.borrow_mut() = Some(self.id.clone());
        Ok(())
    }

    fn select(&self) {
        let mut state = self.state.borrow_mut();
        state.selection = 0..utf16_len(&state.value);
    }
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[derive(Debug, Clone)]
enum Node {
    Element(MemoryElement),
    Input(MemoryInput),
}

#[derive(Default)]
struct PageState {
    nodes: HashMap<String, Node>,
    clipboard: Option<String>,
    hidden: bool,
    hidden_listeners: Vec<Rc<dyn Fn()>>,
}

/// A page whose nodes, clipboard and visibility live in memory.
///
/// Clones share the same page, so a test can hand one clone to
/// [`Feedback`](crate::Feedback) and inspect through another.
#[derive(Clone, Default)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
    focused: Rc<RefCell<Option<String>>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with the given markup, replacing any node with that id.
    pub fn add_element(&self, id: &str, inner_html: &str) -> MemoryElement {
        let element = MemoryElement {
            state: Rc::new(RefCell::new(ElementState {
                inner_html: inner_html.to_string(),
                ..ElementState::default()
            })),
        };
        self.state
            .borrow_mut()
            .nodes
            .insert(id.to_string(), Node::Element(element.clone()));
        element
    }

    pub fn add_input(&self, id: &str, value: &str) -> MemoryInput {
        let end = utf16_len(value);
        let input = MemoryInput {
            id: id.to_string(),
            state: Rc::new(RefCell::new(InputState {
                value: value.to_string(),
                selection: end..end,
            })),
            focused: Rc::clone(&self.focused),
        };
        self.state
            .borrow_mut()
            .nodes
            .insert(id.to_string(), Node::Input(input.clone()));
        input
    }

    pub fn clipboard(&self) -> Option<String> {
        self.state.borrow().clipboard.clone()
    }

    /// Id of the focused input, if any.
    pub fn focused(&self) -> Option<String> {
        self.focused.borrow().clone()
    }

    pub fn is_hidden(&self) -> bool {
        self.state.borrow().hidden
    }

    pub fn hidden_listener_count(&self) -> usize {
        self.state.borrow().hidden_listeners.len()
    }

    /// Switch to hidden and fire the listeners, as leaving the tab or
    /// navigating away would. Does nothing if already hidden.
    pub fn hide(&self) {
        let listeners = {
            let mut state = self.state.borrow_mut();
            if state.hidden {
                return;
            }
            state.hidden = true;
            state.hidden_listeners.clone()
        };
        for listener in listeners {
            listener();
        }
    }

    pub fn show(&self) {
        self.state.borrow_mut().hidden = false;
    }
}

impl Page for MemoryPage {
    type Element = MemoryElement;
    type Input = MemoryInput;

    fn element(&self, id: &str) -> Result<MemoryElement> {
        match self.state.borrow().nodes.get(id) {
            Some(Node::Element(element)) => Ok(element.clone()),
            Some(Node::Input(_)) => Err(Error::WrongElementType {
                id: id.to_string(),
                expected: "a button",
            }),
            None => Err(Error::not_found(id)),
        }
    }

    fn input(&self, id: &str) -> Result<MemoryInput> {
        match self.state.borrow().nodes.get(id) {
            Some(Node::Input(input)) => Ok(input.clone()),
            Some(Node::Element(_)) => Err(Error::WrongElementType {
                id: id.to_string(),
                expected: "an <input>",
            }),
            None => Err(Error::not_found(id)),
        }
    }

    fn write_clipboard(&self, text: &str) -> Result<()> {
        self.state.borrow_mut().clipboard = Some(text.to_string());
        Ok(())
    }

    fn on_hidden(&self, callback: Box<dyn Fn()>) -> Result<()> {
        self.state.borrow_mut().hidden_listeners.push(Rc::from(callback));
        Ok(())
    }
}
