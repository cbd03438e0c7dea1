// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::summary::{DEFAULT_GROUP_BY, DEFAULT_STATS, SummaryOptions};
use crate::table::TableStyle;

/// Defaults for the command line options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub group_by: Option<String>,
    #[serde(default)]
    pub stats: Option<String>,
    #[serde(default)]
    pub reverse: Option<bool>,
}

/// Library source section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LibraryConfig {
    /// JSON library file used when `--library` is not given
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub table: TableStyle,
}

impl Config {
    /// Merge command line values over configured defaults.
    ///
    /// `--not-reverse` always wins; otherwise the configured direction
    /// applies, falling back to descending.
    pub fn summary_options(
        &self,
        query: String,
        group_by: Option<String>,
        stats: Option<String>,
        not_reverse: bool,
    ) -> SummaryOptions {
        SummaryOptions {
            query,
            group_by: group_by
                .or_else(|| self.defaults.group_by.clone())
                .unwrap_or_else(|| DEFAULT_GROUP_BY.to_string()),
            stats: stats
                .or_else(|| self.defaults.stats.clone())
                .unwrap_or_else(|| DEFAULT_STATS.to_string()),
            reverse: !not_reverse && self.defaults.reverse.unwrap_or(true),
        }
    }
}
