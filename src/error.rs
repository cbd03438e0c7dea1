use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizeError {
    #[error("Malformed stat '{stat}': {reason}")]
    MalformedStat { stat: String, reason: String },

    #[error("No items to summarize")]
    EmptyInput,

    #[error("Cannot compute '{stat}' over an empty collection")]
    EmptyCollection { stat: String },

    #[error("Sort key '{key}' missing from summary row")]
    MissingKey { key: String },

    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Invalid library: {0}")]
    InvalidLibrary(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SummarizeError {
    fn from(err: std::io::Error) -> Self {
        SummarizeError::Io(err.to_string())
    }
}

impl SummarizeError {
    pub(crate) fn malformed(stat: &str, reason: impl Into<String>) -> Self {
        SummarizeError::MalformedStat {
            stat: stat.to_string(),
            reason: reason.into(),
        }
    }
}
