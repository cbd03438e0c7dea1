//! Stats module for parsing stat expressions and computing grouped statistics
//!
//! A stat expression such as `range:unique:words|artist` is parsed into a
//! [`StatDescriptor`]. Descriptors are completed against a sample record,
//! records are grouped by a category field, and each group is reduced to one
//! [`StatValue`] per descriptor.

mod aggregate;
mod group;
mod parser;
mod resolver;
mod types;

pub use aggregate::aggregate;
pub use group::{Group, MULTI_VALUE_FIELDS, group_by};
pub use parser::{parse_stat, parse_stats};
pub use resolver::{resolve_type, resolve_types};
pub use types::{Aggregator, StatDescriptor, StatSet, StatValue, StrConverter};
