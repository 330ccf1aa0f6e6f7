use std::fmt;

use async_trait::async_trait;

use crate::error::StoreError;

/// Opaque reference to a stored document stream, returned by writes.
///
/// Only useful for logging and debugging; the store addresses documents by
/// alias, not by stream reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRef(String);

impl StreamRef {
    /// Create a stream reference from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw stream identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as a `ceramic://` URL.
    pub fn to_url(&self) -> String {
        format!("ceramic://{}", self.0)
    }
}

impl fmt::Display for StreamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_url())
    }
}

/// A key/document store scoped to the currently authenticated identity.
///
/// Aliases are well-known names ("passport"); the adapter maps each alias to
/// a document owned by the session's DID. Scoping is the adapter's
/// responsibility — callers never pass a DID. Writes are atomic per call and
/// last-write-wins; the adapter applies no retry and no timeout.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the document stored under `alias`, or `None` if absent.
    async fn get(&self, alias: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Overwrite the document stored under `alias` with `document`.
    async fn set(&self, alias: &str, document: serde_json::Value)
        -> Result<StreamRef, StoreError>;

    /// Remove the document stored under `alias`. Removing an absent alias
    /// is not an error.
    async fn remove(&self, alias: &str) -> Result<(), StoreError>;
}
