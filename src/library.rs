//! Music library backends
//!
//! The summary pipeline only needs `items(query)`: an eager, fully
//! materialized list of records matching a query string.

mod json_library;
mod query;

pub use json_library::JsonLibrary;
pub use query::ItemQuery;

use crate::error::SummarizeError;
use crate::record::Record;

/// Source of records answering item queries
pub trait Library {
    type Item: Record;

    fn items(&self, query: &str) -> Result<Vec<Self::Item>, SummarizeError>;
}
