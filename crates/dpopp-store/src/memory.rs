use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::adapter::{DocumentStore, StreamRef};
use crate::error::StoreError;
use crate::session::IdentitySession;

/// In-memory document store, scoped per DID.
///
/// Reference adapter for tests and local tooling. Documents are keyed by
/// `(did, alias)`; each call resolves the session's current DID, so the same
/// store serves whichever identity is connected at the time of the call.
pub struct MemoryStore {
    session: Arc<dyn IdentitySession>,
    documents: DashMap<(String, String), serde_json::Value>,
}

impl MemoryStore {
    /// Create a store bound to an identity session.
    pub fn new(session: Arc<dyn IdentitySession>) -> Self {
        Self {
            session,
            documents: DashMap::new(),
        }
    }

    /// Number of documents held, across all identities.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn current_did(&self) -> Result<String, StoreError> {
        self.session
            .identifier()
            .map(|did| did.uri().to_string())
            .ok_or(StoreError::NotAuthenticated)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, alias: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let did = self.current_did()?;
        let doc = self
            .documents
            .get(&(did.clone(), alias.to_string()))
            .map(|entry| entry.clone());
        tracing::debug!(did = %did, alias = alias, found = doc.is_some(), "document read");
        Ok(doc)
    }

    async fn set(
        &self,
        alias: &str,
        document: serde_json::Value,
    ) -> Result<StreamRef, StoreError> {
        let did = self.current_did()?;
        self.documents
            .insert((did.clone(), alias.to_string()), document);
        let stream = StreamRef::new(Uuid::now_v7().to_string());
        tracing::debug!(did = %did, alias = alias, stream = %stream, "document written");
        Ok(stream)
    }

    async fn remove(&self, alias: &str) -> Result<(), StoreError> {
        let did = self.current_did()?;
        let removed = self
            .documents
            .remove(&(did.clone(), alias.to_string()))
            .is_some();
        tracing::debug!(did = %did, alias = alias, removed = removed, "document removed");
        Ok(())
    }
}
