//! Record capability
//!
//! The summary core never inspects a concrete record layout. It only asks a
//! record for a typed scalar by field name through the [`Record`] trait, so
//! any library backend can feed it.

mod json_record;
mod value;

pub use json_record::JsonRecord;
pub use value::FieldValue;
pub(crate) use value::format_float;

/// Typed field lookup by name
pub trait Record {
    /// Returns the value stored under `name`, or `None` when the record has
    /// no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<FieldValue> {
        (**self).field(name)
    }
}
