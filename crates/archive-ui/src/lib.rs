//! Button feedback and search-field helpers for the archive pages.
//!
//! The helpers are written once against the [`dom::Page`] seam and run either
//! in the browser (`hydrate` feature, see [`web`]) or against
//! [`dom::memory::MemoryPage`].

pub mod components;
pub mod config;
pub mod dom;
mod error;
pub mod feedback;
pub mod markup;

#[cfg(feature = "hydrate")]
pub mod web;

pub use config::FeedbackConfig;
pub use error::{Error, Result};
pub use feedback::{Action, Feedback};
