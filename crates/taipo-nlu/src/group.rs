//! Grouping training examples by intent

use std::collections::BTreeMap;

use taipo_core::TrainingExample;

/// Group example texts under their intent
///
/// Intents come out sorted; texts keep their input order within an intent.
pub fn group_by_intent(examples: &[TrainingExample]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for example in examples {
        groups
            .entry(example.intent.clone())
            .or_default()
            .push(example.text.clone());
    }

    groups
}
