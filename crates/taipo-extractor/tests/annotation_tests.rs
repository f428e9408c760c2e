//! Corpus-level behaviour of the annotation engine

use proptest::prelude::*;
use taipo_extractor::{
    curly_entity_items, entity_names, replace_ent_assignment, scan_curly, strip_annotations,
};

#[test]
fn test_readme_example() {
    let texts = ["[python](proglang) and [pandas](package)"];

    assert_eq!(entity_names(texts), vec!["proglang", "package"]);
    assert_eq!(replace_ent_assignment(texts), vec!["python and pandas"]);
}

#[test]
fn test_mixed_corpus() {
    let corpus = vec![
        "i want to fly to [berlin](city)".to_string(),
        "book a table in [rome]{entity: city, role: destination}".to_string(),
        "[monday](day) works for me".to_string(),
        "thanks!".to_string(),
    ];

    assert_eq!(entity_names(&corpus), vec!["city", "day"]);

    let items = curly_entity_items(&corpus);
    for token in ["entity", "city", "role", "destination"] {
        assert!(items.contains(token), "missing {token}");
    }
    assert_eq!(items.len(), 4);

    let stripped = replace_ent_assignment(&corpus);
    assert_eq!(stripped.len(), corpus.len());
    assert_eq!(stripped[0], "i want to fly to berlin");
    assert_eq!(stripped[1], corpus[1]);
    assert_eq!(stripped[2], "monday works for me");
    assert_eq!(stripped[3], "thanks!");
}

#[test]
fn test_nested_markup_strips_to_plain_text() {
    let stripped = replace_ent_assignment(["[[a](b)](c)", "[[x](y)](z) and [w](v)"]);
    assert_eq!(stripped, vec!["a", "x and w"]);
    assert_eq!(replace_ent_assignment(&stripped), stripped);
}

#[test]
fn test_degenerate_curly_input_terminates() {
    let inputs = [
        "[",
        "[[[[[[",
        "[ no close",
        "[a]",
        "[a] {",
        "]]]{{{}}}[",
        "{[}]",
    ];

    for input in inputs {
        let occurrences: Vec<_> = scan_curly(input).collect();
        assert!(occurrences.len() <= input.len(), "runaway scan on {input:?}");
    }

    let long = "[".repeat(10_000);
    assert_eq!(scan_curly(&long).count(), 0);
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn annotated_text() -> impl Strategy<Value = (String, Vec<(String, String)>)> {
    prop::collection::vec((word(), word(), "[a-z ]{0,6}"), 0..6).prop_map(|parts| {
        let mut text = String::new();
        let mut pairs = Vec::new();
        for (entity, name, filler) in parts {
            text.push_str(&format!("[{entity}]({name}) {filler} "));
            pairs.push((entity, name));
        }
        (text, pairs)
    })
}

proptest! {
    /// Stripping an already stripped text changes nothing.
    #[test]
    fn strip_is_idempotent((text, _) in annotated_text()) {
        let once = strip_annotations(&text);
        let twice = strip_annotations(&once);
        prop_assert_eq!(once, twice);
    }

    /// Idempotence also holds for bracket and paren noise, nested markup included.
    #[test]
    fn strip_is_idempotent_on_noise(text in "[a-z \\[\\]()]{0,40}") {
        let once = strip_annotations(&text);
        let twice = strip_annotations(&once);
        prop_assert_eq!(once, twice);
    }

    /// Every well-formed annotation contributes its name and disappears when stripped.
    #[test]
    fn well_formed_annotations_are_found_and_removed((text, pairs) in annotated_text()) {
        let mut expected: Vec<String> = Vec::new();
        for (_, name) in &pairs {
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }
        prop_assert_eq!(entity_names([text.as_str()]), expected);

        let stripped = strip_annotations(&text);
        for (entity, name) in &pairs {
            let bracketed = format!("[{}]", entity);
            let parenthesized = format!("({})", name);
            prop_assert!(!stripped.contains(&bracketed));
            prop_assert!(!stripped.contains(&parenthesized));
        }
    }

    /// Arbitrary input never makes the curly scanner run away.
    #[test]
    fn curly_scan_is_bounded(text in "[\\[\\]{}a-z: ,]{0,64}") {
        prop_assert!(scan_curly(&text).count() <= text.len());
    }
}
