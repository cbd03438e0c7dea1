//! Summary pipeline
//!
//! query → parse stats → resolve converters → group → aggregate → sort →
//! render. Everything lives for one invocation only.

use crate::error::SummarizeError;
use crate::library::Library;
use crate::stats::{aggregate, group_by, parse_stats, resolve_types};
use crate::table::{ResultTable, SummaryRow, TableStyle, print_results, render_results};

pub const DEFAULT_GROUP_BY: &str = "genre";
pub const DEFAULT_STATS: &str = "count";

/// Inputs for one summary run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Library query selecting the items to summarize
    pub query: String,
    /// Category field to group by
    pub group_by: String,
    /// Space-separated stat expressions; the first one sorts the table
    pub stats: String,
    /// Sort descending
    pub reverse: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            group_by: DEFAULT_GROUP_BY.to_string(),
            stats: DEFAULT_STATS.to_string(),
            reverse: true,
        }
    }
}

/// Compute grouped stats without rendering them
pub fn compute_results<L: Library>(
    library: &L,
    options: &SummaryOptions,
) -> Result<(ResultTable, String), SummarizeError> {
    let stats = parse_stats(&options.stats)?;
    let sort_key = stats
        .sort_key()
        .ok_or_else(|| SummarizeError::malformed(&options.stats, "no stats given"))?
        .to_string();

    let items = library.items(&options.query)?;
    log::debug!("Query '{}' matched {} item(s)", options.query, items.len());

    let stats = resolve_types(&stats, &items)?;
    let category = options.group_by.to_lowercase();
    let groups = group_by(&category, &items)?;

    let results = groups
        .into_iter()
        .map(|group| -> Result<SummaryRow, SummarizeError> {
            let values = stats
                .iter()
                .map(|(name, descriptor)| {
                    aggregate(&group.records, descriptor).map(|v| (name.to_string(), v))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SummaryRow {
                key: group.key,
                values,
            })
        })
        .collect::<Result<ResultTable, _>>()?;

    Ok((results, sort_key))
}

/// Build the summary table text without printing it
pub fn build_summary<L: Library>(
    library: &L,
    options: &SummaryOptions,
    style: &TableStyle,
) -> Result<String, SummarizeError> {
    let (results, sort_key) = compute_results(library, options)?;
    render_results(&results, &options.group_by, &sort_key, options.reverse, style)
}

/// Summarize the library, print the table to stdout and return it
pub fn summarize<L: Library>(
    library: &L,
    options: &SummaryOptions,
    style: &TableStyle,
) -> Result<String, SummarizeError> {
    let (results, sort_key) = compute_results(library, options)?;
    print_results(&results, &options.group_by, &sort_key, options.reverse, style)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
