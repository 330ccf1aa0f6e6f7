/// Core errors shared across the dPoPP crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid DID format: {0}")]
    InvalidDid(String),

    #[error("validation error: {0}")]
    Validation(String),
}
