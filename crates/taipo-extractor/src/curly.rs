//! Metadata-form annotation scanning
//!
//! Handles `[entity]{key: value, key2: value2}` annotations. The scanner
//! locates each delimiter relative to the previous one: the `]` is searched
//! from the `[`, the `{` from the `]` and the `}` from the `{`. Text between
//! `]` and `{` is therefore allowed and skipped.
//!
//! When a delimiter is missing the scan of that text ends. After an
//! emission the scan resumes at the `{` of the emitted span, so every step
//! consumes at least one character.

use std::collections::HashSet;

use taipo_core::ScanConfig;
use tracing::{debug, warn};

/// A bracket span paired with the curly span that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurlyOccurrence<'a> {
    /// The `[...]` span, brackets included
    pub bracket: &'a str,
    /// The `{...}` span, braces included
    pub curly: &'a str,
}

impl CurlyOccurrence<'_> {
    /// Split the curly span into metadata tokens
    ///
    /// Braces are removed, `:` and `,` become spaces and the result is
    /// split on single spaces. Empty tokens are dropped.
    pub fn metadata_tokens(&self) -> Vec<String> {
        let normalized: String = self
            .curly
            .chars()
            .filter(|c| !matches!(c, '{' | '}'))
            .map(|c| if matches!(c, ':' | ',') { ' ' } else { c })
            .collect();

        normalized
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone)]
enum ScanState<'a> {
    Scanning { rest: &'a str },
    Terminal,
}

/// Lazy iterator over the curly occurrences of one text
#[derive(Debug, Clone)]
pub struct CurlyScanner<'a> {
    state: ScanState<'a>,
    emitted: usize,
    max_iterations: usize,
}

/// Scan `text` for `[...]` / `{...}` pairs with the default iteration cap
pub fn scan_curly(text: &str) -> CurlyScanner<'_> {
    CurlyScanner::new(text)
}

impl<'a> CurlyScanner<'a> {
    /// Create a scanner over `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            state: ScanState::Scanning { rest: text },
            emitted: 0,
            max_iterations: ScanConfig::default().max_curly_iterations,
        }
    }

    /// Set the maximum number of occurrences emitted for this text
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Whether the scanner has reached its terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, ScanState::Terminal)
    }
}

impl<'a> Iterator for CurlyScanner<'a> {
    type Item = CurlyOccurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = match self.state {
            ScanState::Scanning { rest } => rest,
            ScanState::Terminal => return None,
        };

        if self.emitted >= self.max_iterations {
            warn!(
                max_iterations = self.max_iterations,
                "curly scan hit iteration cap, stopping"
            );
            self.state = ScanState::Terminal;
            return None;
        }

        match step(rest) {
            Some((occurrence, next_rest)) => {
                debug_assert!(next_rest.len() < rest.len());
                self.state = ScanState::Scanning { rest: next_rest };
                self.emitted += 1;
                Some(occurrence)
            }
            None => {
                self.state = ScanState::Terminal;
                None
            }
        }
    }
}

/// One scan step: the next occurrence and the text left to scan
fn step(rest: &str) -> Option<(CurlyOccurrence<'_>, &str)> {
    let sq1 = rest.find('[')?;
    let sq2 = rest[sq1..].find(']')?;
    let bracket_close = sq1 + sq2;
    let br1 = rest[bracket_close..].find('{')?;
    let curly_open = bracket_close + br1;
    let br2 = rest[curly_open..].find('}')?;
    let curly_close = curly_open + br2;

    let occurrence = CurlyOccurrence {
        bracket: &rest[sq1..=bracket_close],
        curly: &rest[curly_open..=curly_close],
    };

    Some((occurrence, &rest[curly_open..]))
}

/// Collect the distinct metadata tokens of every curly span in `texts`
pub fn curly_entity_items<I, S>(texts: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    curly_entity_items_with(texts, &ScanConfig::default())
}

/// Same as [`curly_entity_items`] with an explicit scan configuration
pub fn curly_entity_items_with<I, S>(texts: I, config: &ScanConfig) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut items = HashSet::new();
    let mut spans = 0usize;

    for text in texts {
        let scanner = scan_curly(text.as_ref()).with_max_iterations(config.max_curly_iterations);
        for occurrence in scanner {
            spans += 1;
            items.extend(occurrence.metadata_tokens());
        }
    }

    debug!(spans, items = items.len(), "collected curly metadata");
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<(&str, &str)> {
        scan_curly(text).map(|o| (o.bracket, o.curly)).collect()
    }

    #[test]
    fn test_single_occurrence() {
        assert_eq!(
            spans(r#"[python]{"entity": "proglang"}"#),
            vec![("[python]", r#"{"entity": "proglang"}"#)]
        );
    }

    #[test]
    fn test_multiple_occurrences() {
        let text = "[a]{entity: x} and [b]{entity: y, role: z}";
        assert_eq!(
            spans(text),
            vec![
                ("[a]", "{entity: x}"),
                ("[b]", "{entity: y, role: z}")
            ]
        );
    }

    #[test]
    fn test_interleaved_text_between_bracket_and_curly() {
        assert_eq!(spans("[a] junk {k: v}"), vec![("[a]", "{k: v}")]);
    }

    #[test]
    fn test_bracket_without_curly_borrows_later_curly() {
        // The `{` search starts at the first `]`, so `[b]` is skipped over.
        assert_eq!(spans("[a] plain [b]{k: v}"), vec![("[a]", "{k: v}")]);
    }

    #[test]
    fn test_missing_delimiters_terminate() {
        assert!(spans("[open").is_empty());
        assert!(spans("[a] no curly").is_empty());
        assert!(spans("[a]{unclosed").is_empty());
        assert!(spans("no brackets {k: v}").is_empty());

        let mut scanner = scan_curly("[open");
        assert!(scanner.next().is_none());
        assert!(scanner.is_terminal());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_iteration_cap() {
        let text = "[a]{x} [b]{y} [c]{z}";
        assert_eq!(scan_curly(text).with_max_iterations(2).count(), 2);
        assert_eq!(scan_curly(text).count(), 3);
    }

    #[test]
    fn test_metadata_tokens() {
        let occurrence = CurlyOccurrence {
            bracket: "[x]",
            curly: "{entity: proglang, role:lang}",
        };
        assert_eq!(
            occurrence.metadata_tokens(),
            vec!["entity", "proglang", "role", "lang"]
        );
    }

    #[test]
    fn test_curly_entity_items() {
        let items = curly_entity_items(["[x]{entity: proglang}"]);
        assert_eq!(items.len(), 2);
        assert!(items.contains("entity"));
        assert!(items.contains("proglang"));
    }

    #[test]
    fn test_curly_entity_items_across_corpus() {
        let texts = vec![
            "[a]{entity: city}".to_string(),
            "[b]{entity: city, role: destination}".to_string(),
            "nothing here".to_string(),
        ];
        let items = curly_entity_items(&texts);
        let expected: HashSet<String> = ["entity", "city", "role", "destination"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(items, expected);
    }

    #[test]
    fn test_curly_entity_items_empty() {
        assert!(curly_entity_items(Vec::<String>::new()).is_empty());
        assert!(curly_entity_items(["[a](b) only paren form"]).is_empty());
    }

    #[test]
    fn test_curly_entity_items_respects_config() {
        let config = ScanConfig {
            max_curly_iterations: 1,
        };
        let items = curly_entity_items_with(["[a]{first} [b]{second}"], &config);
        assert!(items.contains("first"));
        assert!(!items.contains("second"));
    }
}
