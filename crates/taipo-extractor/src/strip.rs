//! Annotation stripping
//!
//! Rewrites `[entity](ent_name)` into `entity`. Replacement is literal
//! and global: every occurrence of `[entity]` and of `(ent_name)` in the
//! text is rewritten, not only the ones at the matched position.
//!
//! Nested markup such as `[[a](b)](c)` only exposes its outer annotation
//! once the inner one is gone, so passes repeat until the text has no
//! annotation left. Every pass that finds a match shortens the text.

use tracing::debug;

use crate::scanner::find_annotations;

/// Remove name-form annotation syntax from a single text
pub fn strip_annotations(text: &str) -> String {
    let mut current = text.to_string();

    while let Some(next) = strip_pass(&current) {
        debug_assert!(next.len() < current.len());
        current = next;
    }

    current
}

/// One rewrite over the annotations found in `text`, `None` when there are none
fn strip_pass(text: &str) -> Option<String> {
    let mut annotations = find_annotations(text).peekable();
    annotations.peek()?;

    let mut stripped = text.to_string();
    for annotation in annotations {
        stripped = stripped.replace(&annotation.bracketed(), annotation.entity);
        stripped = stripped.replace(&annotation.parenthesized(), "");
    }

    Some(stripped)
}

/// Remove name-form annotation syntax from every text
///
/// The output has the same length and order as the input. Texts without
/// annotations are returned unchanged.
pub fn replace_ent_assignment<I, S>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut changed = 0usize;
    let results: Vec<String> = texts
        .into_iter()
        .map(|text| {
            let text = text.as_ref();
            let stripped = strip_annotations(text);
            if stripped != text {
                changed += 1;
            }
            stripped
        })
        .collect();

    debug!(texts = results.len(), changed, "stripped annotations");
    results
}
