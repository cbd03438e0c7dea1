use std::collections::HashMap;

use crate::error::SummarizeError;
use crate::record::{FieldValue, Record};

/// Category fields whose values may list several entries separated by `;`
pub const MULTI_VALUE_FIELDS: [&str; 3] = ["albumartist", "artist", "genre"];

const MULTI_VALUE_SEPARATOR: char = ';';

/// Records sharing one category value
#[derive(Debug)]
pub struct Group<'a, R> {
    pub key: FieldValue,
    pub records: Vec<&'a R>,
}

/// Group records by the value of `category`.
///
/// For multi-value categories a record joins one group per listed value, so
/// the groups may overlap. Groups come back in first-seen order.
pub fn group_by<'a, R: Record>(
    category: &str,
    records: &'a [R],
) -> Result<Vec<Group<'a, R>>, SummarizeError> {
    let multi_value = MULTI_VALUE_FIELDS.contains(&category);

    let mut groups: Vec<Group<'a, R>> = Vec::new();
    let mut index: HashMap<GroupSlot, usize> = HashMap::new();

    for record in records {
        let value = record
            .field(category)
            .ok_or_else(|| SummarizeError::UnknownField {
                field: category.to_string(),
            })?;

        for key in split_keys(value, multi_value) {
            let slot = GroupSlot::of(&key);
            let position = *index.entry(slot).or_insert_with(|| {
                groups.push(Group {
                    key,
                    records: Vec::new(),
                });
                groups.len() - 1
            });
            groups[position].records.push(record);
        }
    }

    log::debug!(
        "Grouped {} record(s) by '{}' into {} group(s)",
        records.len(),
        category,
        groups.len()
    );
    Ok(groups)
}

/// Hashable identity of a group key. Integral floats share the slot of the
/// equal integer, strings never share a slot with numbers.
#[derive(Debug, PartialEq, Eq, Hash)]
enum GroupSlot {
    Int(i64),
    Float(u64),
    Str(String),
}

impl GroupSlot {
    fn of(key: &FieldValue) -> Self {
        match key {
            FieldValue::Int(n) => GroupSlot::Int(*n),
            FieldValue::Float(x) if x.fract() == 0.0 && x.abs() < i64::MAX as f64 => {
                GroupSlot::Int(*x as i64)
            }
            FieldValue::Float(x) => GroupSlot::Float(x.to_bits()),
            FieldValue::Str(s) => GroupSlot::Str(s.clone()),
        }
    }
}

fn split_keys(value: FieldValue, multi_value: bool) -> Vec<FieldValue> {
    match value {
        FieldValue::Str(s) if multi_value => s
            .split(MULTI_VALUE_SEPARATOR)
            .map(|part| FieldValue::Str(part.trim().to_string()))
            .collect(),
        other => vec![other],
    }
}
