//! summarize library - grouped statistics over a music library
//!
//! This library exposes the summary pipeline and its building blocks.

pub mod config;
pub mod error;
pub mod library;
pub mod record;
pub mod stats;
pub mod summary;
pub mod table;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::SummarizeError;
pub use library::{JsonLibrary, Library};
pub use record::{FieldValue, Record};
pub use summary::{SummaryOptions, build_summary, summarize};
