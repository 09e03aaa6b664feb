use thiserror::Error;

#[derive(Debug, Error)]
pub enum JrdError {
    #[error("Invalid JRD document: expected object")]
    NotAnObject,

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
