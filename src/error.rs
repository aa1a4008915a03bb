use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum FacturierError {
    /// A required reference is missing or does not resolve. The message is
    /// meant to be shown to the user as-is.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("client not found: {0}")]
    ClientNotFound(Uuid),

    #[error("document not found: {0}")]
    DocumentNotFound(Uuid),

    /// Persisted state exists but does not parse as an aggregate. Startup
    /// code recovers from this via [`crate::store::load_or_bootstrap`].
    #[error("stored state is corrupt: {0}")]
    CorruptState(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FacturierError>;
