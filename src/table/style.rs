// Per-column cell formatting

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::stats::StatValue;

/// Format spec for one stat column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ColumnFormat {
    /// Fixed number of fractional digits
    #[serde(default)]
    pub precision: Option<usize>,
}

impl ColumnFormat {
    pub fn apply(&self, value: StatValue) -> String {
        match self.precision {
            Some(precision) => value.format_precision(precision),
            None => value.to_string(),
        }
    }
}

/// Formats keyed by stat expression text
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableStyle {
    #[serde(default)]
    pub formats: BTreeMap<String, ColumnFormat>,
}

impl TableStyle {
    pub fn with_format(mut self, column: impl Into<String>, format: ColumnFormat) -> Self {
        self.formats.insert(column.into(), format);
        self
    }

    /// Format a cell of `column`, falling back to plain conversion
    pub fn format(&self, column: &str, value: StatValue) -> String {
        self.formats
            .get(column)
            .copied()
            .unwrap_or_default()
            .apply(value)
    }
}
