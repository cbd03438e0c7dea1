use std::cmp::Ordering;

use crate::error::SummarizeError;
use crate::record::{FieldValue, Record};
use crate::stats::types::{Aggregator, StatDescriptor, StatValue, StrConverter};

/// Compute one statistic over `records`.
///
/// Plain `count` never reads a field. With `unique`, values are sorted and
/// de-duplicated before anything else happens. String values go through the
/// descriptor's converter (length when none was resolved) unless the
/// aggregator is `count`.
pub fn aggregate<R: Record>(
    records: &[R],
    descriptor: &StatDescriptor,
) -> Result<StatValue, SummarizeError> {
    if !descriptor.reads_field() {
        return Ok(count(records.len()));
    }

    let mut values = records
        .iter()
        .map(|record| {
            record
                .field(&descriptor.field)
                .ok_or_else(|| SummarizeError::UnknownField {
                    field: descriptor.field.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if descriptor.unique {
        values.sort_by(FieldValue::total_cmp);
        values.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);
    }

    if descriptor.aggregator == Aggregator::Count {
        return Ok(count(values.len()));
    }

    let converter = descriptor.str_converter.unwrap_or(StrConverter::Len);
    let numbers: Vec<StatValue> = values
        .iter()
        .map(|value| match value {
            FieldValue::Str(s) => StatValue::Int(converter.convert(s)),
            FieldValue::Int(n) => StatValue::Int(*n),
            FieldValue::Float(x) => StatValue::Float(*x),
        })
        .collect();

    reduce(&numbers, descriptor)
}

fn count(n: usize) -> StatValue {
    StatValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

fn reduce(numbers: &[StatValue], descriptor: &StatDescriptor) -> Result<StatValue, SummarizeError> {
    let aggregator = descriptor.aggregator;
    let bounds = || {
        let min = numbers.iter().copied().min_by(StatValue::total_cmp);
        let max = numbers.iter().copied().max_by(StatValue::total_cmp);
        min.zip(max).ok_or_else(|| SummarizeError::EmptyCollection {
            stat: format!("{}|{}", aggregator, descriptor.field),
        })
    };

    Ok(match aggregator {
        Aggregator::Count => count(numbers.len()),
        Aggregator::Sum => sum(numbers),
        Aggregator::Min => bounds()?.0,
        Aggregator::Max => bounds()?.1,
        Aggregator::Range => match bounds()? {
            (StatValue::Int(lo), StatValue::Int(hi)) => hi
                .checked_sub(lo)
                .map(StatValue::Int)
                .unwrap_or_else(|| StatValue::Float(hi as f64 - lo as f64)),
            (lo, hi) => StatValue::Float(hi.as_f64() - lo.as_f64()),
        },
        Aggregator::Avg => {
            bounds()?;
            let total: f64 = numbers.iter().map(|n| n.as_f64()).sum();
            StatValue::Float(total / numbers.len() as f64)
        }
    })
}

// Integer inputs stay integral; any float, or an i64 overflow, promotes the
// whole sum.
fn sum(numbers: &[StatValue]) -> StatValue {
    let int_total = numbers.iter().try_fold(0i64, |acc, n| match n {
        StatValue::Int(v) => acc.checked_add(*v),
        StatValue::Float(_) => None,
    });
    match int_total {
        Some(total) => StatValue::Int(total),
        None => StatValue::Float(numbers.iter().map(|n| n.as_f64()).sum()),
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
