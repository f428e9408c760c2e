//! NLU document writer
//!
//! Output uses a literal block per intent so that example lines stay
//! readable and diffable:
//!
//! ```yaml
//! version: "2.0"
//! nlu:
//! - intent: negative
//!   examples: |
//!     - this is not my thing
//! ```

use std::path::Path;

use taipo_core::TrainingExample;
use tracing::debug;

use crate::{group_by_intent, NluError, Result, NLU_VERSION};

/// Render training examples as an NLU document
///
/// Intents are written in sorted order. Entity annotations inside the
/// texts are written as-is. Line breaks in intents and texts become
/// spaces so that every record stays on its own lines.
pub fn render_nlu(examples: &[TrainingExample]) -> Result<String> {
    let groups = group_by_intent(examples);

    let mut out = String::new();
    out.push_str(&format!("version: \"{NLU_VERSION}\"\n"));

    if groups.is_empty() {
        out.push_str("nlu: []\n");
        return Ok(out);
    }

    out.push_str("nlu:\n");
    for (intent, texts) in &groups {
        let intent = serde_yaml::to_string(&single_line(intent))?;
        out.push_str(&format!("- intent: {}\n", intent.trim_end()));
        out.push_str("  examples: |\n");
        for text in texts {
            out.push_str(&format!("    - {}\n", single_line(text)));
        }
    }

    Ok(out)
}

fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Write training examples to an NLU file
pub fn write_nlu_file(examples: &[TrainingExample], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let content = render_nlu(examples)?;

    std::fs::write(path, content).map_err(|e| NluError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(path = %path.display(), examples = examples.len(), "wrote nlu file");
    Ok(())
}
