use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Malformed meal plan in storage: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Import rejected: {0}")]
    Import(#[source] serde_json::Error),

    #[error("Unknown {kind}: {value:?}")]
    InvalidKey { kind: &'static str, value: String },

    #[error("No item {index} in {location} (it has {len})")]
    IndexOutOfRange {
        location: String,
        index: i64,
        len: usize,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub(crate) fn invalid_key(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::InvalidKey {
            kind,
            value: value.into(),
        }
    }
}
