use thiserror::Error;

#[derive(Debug, Error)]
pub enum SocieteError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Malformed catalog entry '{id}': {reason}")]
    MalformedCatalogEntry { id: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SocieteError {
    fn from(e: serde_json::Error) -> Self {
        SocieteError::SerializationError(e.to_string())
    }
}
