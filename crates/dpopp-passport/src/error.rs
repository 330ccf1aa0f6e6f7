use dpopp_store::StoreError;

/// Passport lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum PassportError {
    /// Create was called while a record already exists under the alias.
    #[error("a passport record already exists for this identity")]
    AlreadyExists,

    /// An update was attempted while no record exists under the alias.
    #[error("no passport record found for this identity")]
    NotFound,

    #[error("invalid attestation definition: {0}")]
    InvalidDefinition(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
