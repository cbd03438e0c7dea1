//! Table rendering for summary results

mod render;
mod style;

pub use render::{ResultTable, SummaryRow, print_results, render_results, render_table};
pub use style::{ColumnFormat, TableStyle};
