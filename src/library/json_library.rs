use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;

use super::{ItemQuery, Library};
use crate::error::SummarizeError;
use crate::record::JsonRecord;

/// A library exported as a JSON array of item objects
/// (for example `beet export -l` output).
#[derive(Debug, Clone, Default)]
pub struct JsonLibrary {
    items: Vec<JsonRecord>,
}

impl JsonLibrary {
    pub fn new(items: Vec<JsonRecord>) -> Self {
        Self { items }
    }

    /// Load from a file, or from stdin when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, SummarizeError> {
        let json_str = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        let library = Self::from_json_str(&json_str)?;
        log::debug!(
            "Loaded {} item(s) from {}",
            library.len(),
            path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
        );
        Ok(library)
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, SummarizeError> {
        let value: Value = serde_json::from_str(json_str)
            .map_err(|e| SummarizeError::InvalidJson(e.to_string()))?;

        let Value::Array(elements) = value else {
            return Err(SummarizeError::InvalidLibrary(
                "expected a JSON array of items".to_string(),
            ));
        };

        let items = elements
            .into_iter()
            .enumerate()
            .map(|(i, element)| match element {
                Value::Object(fields) => Ok(JsonRecord::new(fields)),
                _ => Err(SummarizeError::InvalidLibrary(format!(
                    "item {} is not an object",
                    i
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Library for JsonLibrary {
    type Item = JsonRecord;

    fn items(&self, query: &str) -> Result<Vec<JsonRecord>, SummarizeError> {
        let query = ItemQuery::parse(query);
        if query.is_empty() {
            return Ok(self.items.clone());
        }
        Ok(self
            .items
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect())
    }
}
