//! Entity name collection over a corpus

use std::collections::HashSet;

use tracing::debug;

use crate::scanner::find_annotations;

/// Collect the distinct entity names used in `texts`
///
/// Names come from `[entity](ent_name)` annotations. The result keeps
/// the order in which each name was first seen.
pub fn entity_names<I, S>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::new();

    for text in texts {
        for annotation in find_annotations(text.as_ref()) {
            if seen.insert(annotation.ent_name.to_string()) {
                names.push(annotation.ent_name.to_string());
            }
        }
    }

    debug!(names = names.len(), "collected entity names");
    names
}
