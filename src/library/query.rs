//! Item queries over JSON records
//!
//! A small subset of beets' query syntax. Terms are separated by whitespace
//! and must all match:
//! - `field:text` matches when the field's value contains `text`
//!   (case-insensitive)
//! - `field:lo..hi` matches numeric values in the inclusive range; either
//!   bound may be left out
//! - bare `text` matches when any string field contains it

use crate::record::{FieldValue, JsonRecord, Record};

const FIELD_SEPARATOR: char = ':';
const RANGE_SEPARATOR: &str = "..";

#[derive(Debug, Clone, PartialEq)]
enum Pattern {
    Substring(String),
    Range { lo: Option<f64>, hi: Option<f64> },
}

#[derive(Debug, Clone, PartialEq)]
enum Term {
    Field { field: String, pattern: Pattern },
    Any(String),
}

/// Parsed conjunction of query terms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    terms: Vec<Term>,
}

impl ItemQuery {
    pub fn parse(query: &str) -> Self {
        let terms = query.split_whitespace().map(parse_term).collect();
        Self { terms }
    }

    /// Whether the query has no terms and so matches everything
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, record: &JsonRecord) -> bool {
        self.terms.iter().all(|term| term_matches(term, record))
    }
}

fn parse_term(term: &str) -> Term {
    match term.split_once(FIELD_SEPARATOR) {
        Some((field, pattern)) if !field.is_empty() => Term::Field {
            field: field.to_lowercase(),
            pattern: parse_pattern(pattern),
        },
        _ => Term::Any(term.to_lowercase()),
    }
}

fn parse_pattern(pattern: &str) -> Pattern {
    if let Some((lo, hi)) = pattern.split_once(RANGE_SEPARATOR) {
        if let (Some(lo), Some(hi)) = (parse_bound(lo), parse_bound(hi)) {
            if lo.is_some() || hi.is_some() {
                return Pattern::Range { lo, hi };
            }
        }
    }
    Pattern::Substring(pattern.to_lowercase())
}

// Outer None: not a number. Inner None: bound left out.
fn parse_bound(bound: &str) -> Option<Option<f64>> {
    if bound.is_empty() {
        return Some(None);
    }
    bound.parse::<f64>().ok().map(Some)
}

fn term_matches(term: &Term, record: &JsonRecord) -> bool {
    match term {
        Term::Field { field, pattern } => record
            .field(field)
            .is_some_and(|value| pattern_matches(pattern, &value)),
        Term::Any(needle) => record.field_names().any(|name| {
            matches!(record.field(name), Some(FieldValue::Str(s)) if s.to_lowercase().contains(needle))
        }),
    }
}

fn pattern_matches(pattern: &Pattern, value: &FieldValue) -> bool {
    match pattern {
        Pattern::Substring(needle) => value.to_string().to_lowercase().contains(needle),
        Pattern::Range { lo, hi } => value.as_f64().is_some_and(|v| {
            lo.is_none_or(|lo| v >= lo) && hi.is_none_or(|hi| v <= hi)
        }),
    }
}
