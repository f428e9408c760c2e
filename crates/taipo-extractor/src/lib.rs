//! taipo Extractor - Entity annotation handling for NLU training data
//!
//! Training utterances carry inline entity markup in two forms:
//! - name form: `[python](proglang)`
//! - metadata form: `[python]{entity: proglang, role: language}`
//!
//! This crate finds those annotations without a grammar, collects the
//! entity names and metadata tokens used across a corpus, and rewrites
//! annotated text back to plain text. Malformed markup never fails: it
//! is either skipped or scanned as far as its delimiters allow.
//!
//! All functions slice text only at ASCII delimiter positions, so
//! multi-byte characters are never split.

pub mod curly;
pub mod names;
pub mod scanner;
pub mod strip;

pub use curly::{
    curly_entity_items, curly_entity_items_with, scan_curly, CurlyOccurrence, CurlyScanner,
};
pub use names::entity_names;
pub use scanner::{find_annotations, Annotation, Annotations};
pub use strip::{replace_ent_assignment, strip_annotations};
