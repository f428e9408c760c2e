//! taipo Core - Shared domain types and configuration
//!
//! This crate defines the abstractions shared by the taipo crates:
//! - Training examples (an utterance and the intent it belongs to)
//! - Configuration management

pub mod config;

pub use config::{AppConfig, ConfigError, LoggingConfig, ScanConfig};

use serde::{Deserialize, Serialize};

// ============================================================================
// Training Data
// ============================================================================

/// A single training utterance labelled with an intent
///
/// The text may carry inline entity annotations such as
/// `[python](proglang)` or `[python]{"entity": "proglang"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Utterance text, possibly annotated
    pub text: String,

    /// Intent label
    pub intent: String,
}

impl TrainingExample {
    /// Create a new training example
    pub fn new(text: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            intent: intent.into(),
        }
    }

    /// Replace the text, keeping the intent
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
