//! Name-form annotation scanner
//!
//! Finds `[entity](ent_name)` occurrences by walking the text from left
//! to right. The entity may not contain `]` and the name may not contain
//! `)`; both must be non-empty. There is no nesting: a `[` inside the
//! entity text is ordinary text.

/// A `[entity](ent_name)` occurrence inside a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// Surface text between the brackets
    pub entity: &'a str,
    /// Entity name between the parentheses
    pub ent_name: &'a str,
    /// Byte offset of the opening `[`
    pub start: usize,
    /// Byte offset just past the closing `)`
    pub end: usize,
}

impl Annotation<'_> {
    /// The `[entity]` part, brackets included
    pub fn bracketed(&self) -> String {
        format!("[{}]", self.entity)
    }

    /// The `(ent_name)` part, parentheses included
    pub fn parenthesized(&self) -> String {
        format!("({})", self.ent_name)
    }
}

/// Lazy iterator over the annotations of one text
///
/// Created by [`find_annotations`]. Matches never overlap and are
/// yielded in the order they appear.
#[derive(Debug, Clone)]
pub struct Annotations<'a> {
    text: &'a str,
    pos: usize,
}

/// Scan `text` for `[entity](ent_name)` annotations
pub fn find_annotations(text: &str) -> Annotations<'_> {
    Annotations { text, pos: 0 }
}

impl<'a> Iterator for Annotations<'a> {
    type Item = Annotation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(offset) = self.text[self.pos..].find('[') {
            let open = self.pos + offset;
            match match_at(self.text, open) {
                Candidate::Found(annotation) => {
                    self.pos = annotation.end;
                    return Some(annotation);
                }
                Candidate::Skip(resume) => self.pos = resume,
                Candidate::Exhausted => break,
            }
        }

        self.pos = self.text.len();
        None
    }
}

/// Outcome of trying to match at one `[`
enum Candidate<'a> {
    Found(Annotation<'a>),
    /// No match can start before this offset
    Skip(usize),
    /// No match can start anywhere in the rest of the text
    Exhausted,
}

/// Try to match a full annotation whose `[` sits at `open`
///
/// Every `[` between `open` and the next `]` sees that same `]`, so a
/// failure after finding it rules all of them out at once. A missing `]`
/// or `)` rules out the rest of the text.
fn match_at(text: &str, open: usize) -> Candidate<'_> {
    let entity_start = open + 1;
    let Some(offset) = text[entity_start..].find(']') else {
        return Candidate::Exhausted;
    };
    let close = entity_start + offset;

    if close == entity_start || !text[close + 1..].starts_with('(') {
        return Candidate::Skip(close + 1);
    }

    let name_start = close + 2;
    let Some(offset) = text[name_start..].find(')') else {
        return Candidate::Exhausted;
    };
    let name_end = name_start + offset;
    if name_end == name_start {
        return Candidate::Skip(close + 1);
    }

    Candidate::Found(Annotation {
        entity: &text[entity_start..close],
        ent_name: &text[name_start..name_end],
        start: open,
        end: name_end + 1,
    })
}
