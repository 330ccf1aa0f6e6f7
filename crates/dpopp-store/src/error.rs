/// Document store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("identity session is not authenticated")]
    NotAuthenticated,

    #[error("store backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
