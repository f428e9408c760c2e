//! taipo NLU - Training document reading and writing
//!
//! Reads and writes Rasa-style NLU documents:
//!
//! ```yaml
//! version: "2.0"
//! nlu:
//! - intent: greet
//!   examples: |
//!     - hello there
//!     - hi [alice](name)
//! ```
//!
//! Each line of an `examples` block becomes one `TrainingExample`.
//! Entries that are not intents (synonyms, regexes, lookup tables) are
//! ignored on read.

use serde::Deserialize;
use thiserror::Error;

pub mod group;
pub mod reader;
pub mod writer;

pub use group::group_by_intent;
pub use reader::{read_nlu_file, read_nlu_str};
pub use writer::{render_nlu, write_nlu_file};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while reading or writing NLU documents
#[derive(Error, Debug)]
pub enum NluError {
    /// IO error while reading or writing the file
    #[error("IO error on file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid YAML or has the wrong shape
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, NluError>;

// ============================================================================
// Document Types
// ============================================================================

/// Version written into generated documents
pub const NLU_VERSION: &str = "2.0";

/// Top level of an NLU document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NluDocument {
    /// Format version; older files write it as a bare number
    #[serde(default)]
    pub version: Option<serde_yaml::Value>,

    /// Training data entries
    #[serde(default)]
    pub nlu: Vec<NluEntry>,
}

impl NluDocument {
    /// Version as a string, whatever YAML type it was written with
    pub fn version(&self) -> Option<String> {
        match self.version.as_ref()? {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// One entry of the `nlu` list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NluEntry {
    /// Intent label; absent for synonym/regex/lookup entries
    #[serde(default)]
    pub intent: Option<String>,

    /// Newline separated `- example` lines
    #[serde(default)]
    pub examples: Option<String>,
}
