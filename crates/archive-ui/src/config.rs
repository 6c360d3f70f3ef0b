//! Element ids, labels and CSS classes the helpers work with.
//!
//! Defaults match the archive templates, so a config file only needs the keys
//! it wants to change:
//!
//! ```toml
//! [labels]
//! uploading = "Uploading"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

pub const UPLOAD_BUTTON_ID: &str = "upload-button";
pub const SEARCH_BUTTON_ID: &str = "search-button";
pub const SEARCH_INPUT_ID: &str = "search-input-field";

pub const DEFAULT_UPLOADING_LABEL: &str = "アップロード中";
pub const DEFAULT_SPINNER_CLASS: &str = "spinner-border spinner-border-sm";
pub const DEFAULT_DISABLED_CLASS: &str = "disabled";

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub upload_button: String,
    pub search_button: String,
    pub search_input: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            upload_button: UPLOAD_BUTTON_ID.to_string(),
            search_button: SEARCH_BUTTON_ID.to_string(),
            search_input: SEARCH_INPUT_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Shown next to the spinner while an upload is in flight.
    pub uploading: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            uploading: DEFAULT_UPLOADING_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    /// Class list of the spinner `<span>`.
    pub spinner: String,
    /// Single class added to the upload button. Cosmetic only.
    pub disabled: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            spinner: DEFAULT_SPINNER_CLASS.to_string(),
            disabled: DEFAULT_DISABLED_CLASS.to_string(),
        }
    }
}

// ── Public config ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub ids: ElementIds,
    pub labels: Labels,
    pub classes: Classes,
}

impl FeedbackConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file on the host.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("ids.upload_button", &self.ids.upload_button),
            ("ids.search_button", &self.ids.search_button),
            ("ids.search_input", &self.ids.search_input),
            ("classes.spinner", &self.classes.spinner),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{key} must not be empty")));
            }
        }
        // classList.add() rejects tokens containing whitespace
        if self.classes.disabled.trim().is_empty() || self.classes.disabled.contains(char::is_whitespace) {
            return Err(Error::Config("classes.disabled must be a single class name".to_string()));
        }
        Ok(())
    }
}
