use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::AttestationDefinition;

/// A materialized attestation attached to a passport.
///
/// Fields are denormalized copies of the provider definition at the time the
/// stamp was added; a later change to the definition does not flow back into
/// existing stamps. Serialized with the camelCase keys of the passport tile
/// schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    /// Provider reference this stamp was built from.
    pub provider_id: String,
    /// Provider name, copied from the definition.
    pub name: String,
    /// Provider description, copied from the definition.
    pub description: String,
    /// Static verification flag, copied from the definition.
    pub is_verified: bool,
    /// When the stamp was added.
    pub date_verified: DateTime<Utc>,
}

impl Stamp {
    /// Materialize a stamp from a provider definition at time `at`.
    pub fn from_definition(definition: &AttestationDefinition, at: DateTime<Utc>) -> Self {
        Self {
            provider_id: definition.provider_ref.clone(),
            name: definition.display_name.clone(),
            description: definition.description.clone(),
            is_verified: definition.verified,
            date_verified: at,
        }
    }
}

/// The single passport document owned by an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportRecord {
    /// Creation time; never changes after the record is first persisted.
    pub date_created: DateTime<Utc>,
    /// Rewritten on every mutation.
    pub date_updated: DateTime<Utc>,
    /// Attached stamps, in the registry's definition order at save time.
    /// Duplicates by provider are not deduplicated.
    pub stamps: Vec<Stamp>,
}

impl PassportRecord {
    /// Create an empty record with `date_created == date_updated == at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            date_created: at,
            date_updated: at,
            stamps: Vec::new(),
        }
    }

    /// The passport score: the number of attached stamps. Each occurrence
    /// counts, including repeated providers.
    pub fn score(&self) -> usize {
        self.stamps.len()
    }

    /// Whether the passport is considered valid: at least one stamp.
    pub fn is_valid(&self) -> bool {
        self.score() > 0
    }
}
