//! NLU document reader

use std::path::Path;

use taipo_core::TrainingExample;
use tracing::debug;

use crate::{NluDocument, NluError, Result};

impl NluDocument {
    /// Flatten intent entries into training examples
    pub fn training_examples(&self) -> Vec<TrainingExample> {
        let mut examples = Vec::new();

        for entry in &self.nlu {
            let Some(intent) = &entry.intent else {
                continue;
            };
            let Some(block) = &entry.examples else {
                continue;
            };

            for line in block.split('\n') {
                let text = drop_list_marker(line);
                if !text.is_empty() {
                    examples.push(TrainingExample::new(text, intent.as_str()));
                }
            }
        }

        examples
    }
}

/// Drop the two-character `- ` marker from an example line
fn drop_list_marker(line: &str) -> &str {
    match line.char_indices().nth(2) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

/// Parse NLU YAML content into training examples
pub fn read_nlu_str(content: &str) -> Result<Vec<TrainingExample>> {
    let document: NluDocument = serde_yaml::from_str(content)?;
    let version = document.version();
    debug!(
        version = version.as_deref().unwrap_or("unknown"),
        entries = document.nlu.len(),
        "parsed nlu document"
    );
    Ok(document.training_examples())
}

/// Read an NLU file into training examples
pub fn read_nlu_file(path: impl AsRef<Path>) -> Result<Vec<TrainingExample>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| NluError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let examples = read_nlu_str(&content)?;
    debug!(path = %path.display(), examples = examples.len(), "read nlu file");
    Ok(examples)
}
