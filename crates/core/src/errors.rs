use thiserror::Error;

/// Unified error type for the finplan-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The engine services themselves never fail — they are total functions over
/// well-typed input. Errors arise only at the facade boundary: input
/// validation, asset lookup, and JSON import/export.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
