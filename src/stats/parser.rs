use crate::error::SummarizeError;
use crate::stats::types::{Aggregator, StatDescriptor, StatSet, StrConverter};

const MODIFIER_SEPARATOR: char = ':';
const FIELD_SEPARATOR: char = '|';
const UNIQUE_TOKEN: &str = "unique";

/// Parse one stat expression.
///
/// Format is `[modifier(:modifier)*]|field`, where modifiers are at most one
/// aggregator (`min`, `max`, `count`, `sum`, `avg`, `range`), at most one
/// string converter (`len`, `words`) and optionally `unique`. Tokens are
/// case-insensitive. An expression without `|` is a bare field name summed
/// over; the bare word `count` counts items.
pub fn parse_stat(stat: &str) -> Result<StatDescriptor, SummarizeError> {
    if stat.is_empty() {
        return Err(SummarizeError::malformed(stat, "empty stat expression"));
    }

    let lowered = stat.to_lowercase();
    if lowered == Aggregator::Count.name() {
        return Ok(StatDescriptor::count());
    }

    let (modifiers, field) = match lowered.rsplit_once(FIELD_SEPARATOR) {
        Some((modifiers, field)) => (modifiers, field),
        None => ("", lowered.as_str()),
    };

    if field.is_empty() {
        return Err(SummarizeError::malformed(stat, "missing field name"));
    }

    let mut aggregator = None;
    let mut str_converter = None;
    let mut unique = false;

    // "|field" carries an empty modifier list
    let tokens = modifiers
        .split(MODIFIER_SEPARATOR)
        .filter(|_| !modifiers.is_empty());

    for token in tokens {
        if let Some(agg) = Aggregator::from_token(token) {
            if aggregator.replace(agg).is_some() {
                return Err(SummarizeError::malformed(
                    stat,
                    "more than one aggregator specified",
                ));
            }
        } else if let Some(conv) = StrConverter::from_token(token) {
            if str_converter.replace(conv).is_some() {
                return Err(SummarizeError::malformed(
                    stat,
                    "more than one str conversion specified",
                ));
            }
        } else if token == UNIQUE_TOKEN {
            unique = true;
        } else {
            return Err(SummarizeError::malformed(
                stat,
                format!("unknown modifier '{}'", token),
            ));
        }
    }

    Ok(StatDescriptor {
        field: field.to_string(),
        aggregator: aggregator.unwrap_or(Aggregator::Sum),
        str_converter,
        unique,
    })
}

/// Parse a space-separated list of stat expressions, keeping their order.
///
/// Consecutive spaces produce empty expressions, which are rejected.
pub fn parse_stats(stats: &str) -> Result<StatSet, SummarizeError> {
    let set = stats
        .split(' ')
        .map(|stat| parse_stat(stat).map(|d| (stat.to_string(), d)))
        .collect::<Result<StatSet, _>>()?;

    log::debug!("Parsed {} stat(s) from '{}'", set.len(), stats);
    Ok(set)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
