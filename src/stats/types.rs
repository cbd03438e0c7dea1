//! Type definitions for stat descriptors and computed values

use std::cmp::Ordering;
use std::fmt;

use crate::record::format_float;

/// Reduction applied to a group's collected values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregator {
    Min,
    Max,
    Count,
    Sum,
    Avg,
    Range,
}

impl Aggregator {
    pub const ALL: [Aggregator; 6] = [
        Aggregator::Min,
        Aggregator::Max,
        Aggregator::Count,
        Aggregator::Sum,
        Aggregator::Avg,
        Aggregator::Range,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Aggregator::Min => "min",
            Aggregator::Max => "max",
            Aggregator::Count => "count",
            Aggregator::Sum => "sum",
            Aggregator::Avg => "avg",
            Aggregator::Range => "range",
        }
    }

    /// Matches an already-lowercased modifier token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == token)
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maps a string value onto a number so it can be aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrConverter {
    /// Character count
    Len,
    /// Number of tokens when split on a single space
    Words,
}

impl StrConverter {
    pub fn name(self) -> &'static str {
        match self {
            StrConverter::Len => "len",
            StrConverter::Words => "words",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "len" => Some(StrConverter::Len),
            "words" => Some(StrConverter::Words),
            _ => None,
        }
    }

    pub fn convert(self, s: &str) -> i64 {
        let n = match self {
            StrConverter::Len => s.chars().count(),
            StrConverter::Words => s.split(' ').count(),
        };
        i64::try_from(n).unwrap_or(i64::MAX)
    }
}

/// Parsed form of one stat expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatDescriptor {
    /// Lowercased field name; a placeholder for plain `count`
    pub field: String,
    pub aggregator: Aggregator,
    pub str_converter: Option<StrConverter>,
    pub unique: bool,
}

impl StatDescriptor {
    /// Field stored in the plain `count` descriptor. Never read.
    pub const COUNT_PLACEHOLDER_FIELD: &'static str = "title";

    /// The standalone `count` shortcut
    pub fn count() -> Self {
        Self {
            field: Self::COUNT_PLACEHOLDER_FIELD.to_string(),
            aggregator: Aggregator::Count,
            str_converter: None,
            unique: false,
        }
    }

    /// Whether aggregation needs to read field values at all
    pub fn reads_field(&self) -> bool {
        self.aggregator != Aggregator::Count || self.unique
    }
}

/// Ordered mapping of expression text to descriptor.
///
/// The first entry is the default sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatSet {
    entries: Vec<(String, StatDescriptor)>,
}

impl StatSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stat. A repeated name keeps its first position and takes
    /// the new descriptor.
    pub fn push(&mut self, name: impl Into<String>, descriptor: StatDescriptor) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = descriptor,
            None => self.entries.push((name, descriptor)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&StatDescriptor> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    /// Expression text of the first stat
    pub fn sort_key(&self) -> Option<&str> {
        self.entries.first().map(|(n, _)| n.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatDescriptor)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }
}

impl FromIterator<(String, StatDescriptor)> for StatSet {
    fn from_iter<I: IntoIterator<Item = (String, StatDescriptor)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, descriptor) in iter {
            set.push(name, descriptor);
        }
        set
    }
}

/// A computed statistic
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Int(i64),
    Float(f64),
}

impl StatValue {
    pub fn as_f64(self) -> f64 {
        match self {
            StatValue::Int(n) => n as f64,
            StatValue::Float(x) => x,
        }
    }

    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (StatValue::Int(a), StatValue::Int(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }

    /// Formats with a fixed number of fractional digits
    pub fn format_precision(self, precision: usize) -> String {
        format!("{:.*}", precision, self.as_f64())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(n) => write!(f, "{}", n),
            StatValue::Float(x) => write!(f, "{}", format_float(*x)),
        }
    }
}
