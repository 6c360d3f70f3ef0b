//! Error type shared by every helper.

use thiserror::Error;

/// Why a helper could not do its job.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// No element with this id exists on the page.
    #[error("element '#{id}' not found")]
    NotFound { id: String },

    /// The id exists but names the wrong kind of element.
    #[error("element '#{id}' is not {expected}")]
    WrongElementType { id: String, expected: &'static str },

    /// The browser rejected a DOM call.
    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
