use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use dpopp_core::PassportConfig;
use dpopp_store::{DocumentStore, StoreError};

use crate::error::PassportError;
use crate::record::{PassportRecord, Stamp};
use crate::registry::AttestationRegistry;

/// Well-known alias the passport record is stored under.
pub const PASSPORT_ALIAS: &str = "passport";

/// Lifecycle manager for the passport record of the connected identity.
///
/// Stateless: all durable state lives in the document store, every read is
/// fresh, and each operation issues at most one store call per step with no
/// retry and no timeout. Identity scoping is the store's concern; the
/// manager never handles DIDs. The caller is expected to drive at most one
/// mutation at a time — concurrent mutations race with last-write-wins
/// outcome at the store.
pub struct PassportManager {
    store: Arc<dyn DocumentStore>,
    registry: Arc<AttestationRegistry>,
    alias: String,
}

impl PassportManager {
    /// Create a manager over a store and registry, using the default alias.
    pub fn new(store: Arc<dyn DocumentStore>, registry: Arc<AttestationRegistry>) -> Self {
        Self {
            store,
            registry,
            alias: PASSPORT_ALIAS.to_string(),
        }
    }

    /// Create a manager honoring the configured record alias.
    pub fn from_config(
        config: &PassportConfig,
        store: Arc<dyn DocumentStore>,
        registry: Arc<AttestationRegistry>,
    ) -> Self {
        Self {
            store,
            registry,
            alias: config.record_alias.clone(),
        }
    }

    /// The attestation registry backing this manager.
    pub fn registry(&self) -> &AttestationRegistry {
        &self.registry
    }

    /// Create the passport record for the connected identity.
    ///
    /// Fails with [`PassportError::AlreadyExists`] if a record is already
    /// persisted under the alias. On success the new record has
    /// `date_created == date_updated` and no stamps; the returned value
    /// echoes what was written, without re-reading the store.
    pub async fn create_record(&self) -> Result<PassportRecord, PassportError> {
        if self.store.get(&self.alias).await?.is_some() {
            return Err(PassportError::AlreadyExists);
        }

        let record = PassportRecord::new(Utc::now());
        let document = serde_json::to_value(&record)?;
        let stream = self.store.set(&self.alias, document).await?;
        tracing::info!(stream = %stream, "passport record created");
        Ok(record)
    }

    /// Read the passport record for the connected identity.
    ///
    /// Returns `None` when no record exists or when the session is not
    /// authenticated; other store failures propagate.
    pub async fn get_record(&self) -> Result<Option<PassportRecord>, PassportError> {
        match self.store.get(&self.alias).await {
            Ok(Some(document)) => Ok(Some(serde_json::from_value(document)?)),
            Ok(None) => Ok(None),
            Err(StoreError::NotAuthenticated) => {
                tracing::debug!("passport read while not connected");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the passport's stamps wholesale with the selected providers.
    ///
    /// Stamps are built in the registry's definition order, never in
    /// selection order, all sharing a single timestamp. Providers absent
    /// from `selected` are dropped even if previously stamped — an empty
    /// selection clears every stamp. Refs with no registered definition are
    /// ignored. `date_created` carries over unchanged.
    ///
    /// Fails with [`PassportError::NotFound`] if no record is persisted.
    pub async fn set_stamps(
        &self,
        existing: &PassportRecord,
        selected: &HashSet<String>,
    ) -> Result<PassportRecord, PassportError> {
        if self.store.get(&self.alias).await?.is_none() {
            return Err(PassportError::NotFound);
        }

        let now = Utc::now();
        let stamps: Vec<Stamp> = self
            .registry
            .definitions()
            .iter()
            .filter(|definition| selected.contains(definition.provider_ref.as_str()))
            .map(|definition| Stamp::from_definition(definition, now))
            .collect();

        let updated = PassportRecord {
            date_created: existing.date_created,
            date_updated: now,
            stamps,
        };
        let document = serde_json::to_value(&updated)?;
        let stream = self.store.set(&self.alias, document).await?;
        tracing::info!(stream = %stream, score = updated.score(), "passport stamps replaced");
        Ok(updated)
    }

    /// Merge the selected providers into the passport's existing stamps.
    ///
    /// The alternative to [`set_stamps`](Self::set_stamps) for callers that
    /// want union semantics: existing stamps are kept untouched, and a new
    /// stamp is appended (in definition order) for each selected provider
    /// not already stamped.
    ///
    /// Fails with [`PassportError::NotFound`] if no record is persisted.
    pub async fn merge_stamps(
        &self,
        existing: &PassportRecord,
        selected: &HashSet<String>,
    ) -> Result<PassportRecord, PassportError> {
        if self.store.get(&self.alias).await?.is_none() {
            return Err(PassportError::NotFound);
        }

        let now = Utc::now();
        let mut stamps = existing.stamps.clone();
        for definition in self.registry.definitions() {
            let already_stamped = stamps
                .iter()
                .any(|s| s.provider_id == definition.provider_ref);
            if selected.contains(definition.provider_ref.as_str()) && !already_stamped {
                stamps.push(Stamp::from_definition(definition, now));
            }
        }

        let updated = PassportRecord {
            date_created: existing.date_created,
            date_updated: now,
            stamps,
        };
        let document = serde_json::to_value(&updated)?;
        let stream = self.store.set(&self.alias, document).await?;
        tracing::info!(stream = %stream, score = updated.score(), "passport stamps merged");
        Ok(updated)
    }

    /// Remove the passport record. Idempotent: removing an absent record is
    /// not an error, and afterwards the alias reads as absent, not as an
    /// empty record.
    pub async fn remove_record(&self) -> Result<(), PassportError> {
        self.store.remove(&self.alias).await?;
        tracing::info!("passport record removed");
        Ok(())
    }
}
