//! Fills in type-dependent defaults that need a look at real data

use crate::error::SummarizeError;
use crate::record::Record;
use crate::stats::types::{Aggregator, StatDescriptor, StatSet, StrConverter};

/// Complete one descriptor against a sample record.
///
/// String fields without an explicit converter are measured by length.
/// `count` descriptors are returned untouched.
pub fn resolve_type<R: Record>(
    descriptor: &StatDescriptor,
    sample: &R,
) -> Result<StatDescriptor, SummarizeError> {
    let mut resolved = descriptor.clone();
    if descriptor.aggregator == Aggregator::Count {
        return Ok(resolved);
    }

    let value = sample
        .field(&descriptor.field)
        .ok_or_else(|| SummarizeError::UnknownField {
            field: descriptor.field.clone(),
        })?;

    if value.is_string_like() && resolved.str_converter.is_none() {
        resolved.str_converter = Some(StrConverter::Len);
    }
    Ok(resolved)
}

/// Complete every descriptor in `stats`, sampling the first record.
pub fn resolve_types<R: Record>(
    stats: &StatSet,
    records: &[R],
) -> Result<StatSet, SummarizeError> {
    let sample = records.first().ok_or(SummarizeError::EmptyInput)?;

    stats
        .iter()
        .map(|(name, descriptor)| -> Result<_, SummarizeError> {
            let resolved = resolve_type(descriptor, sample)?;
            log::debug!(
                "Stat '{}' resolved: converter={:?}",
                name,
                resolved.str_converter.map(StrConverter::name)
            );
            Ok((name.to_string(), resolved))
        })
        .collect()
}
