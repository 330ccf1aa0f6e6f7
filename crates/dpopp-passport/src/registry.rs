use serde::{Deserialize, Serialize};

use crate::error::PassportError;

/// Static definition of an attestation provider.
///
/// The `verified` flag is deploy-time configuration, not the result of any
/// cryptographic check — the subsystem trusts it as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttestationDefinition {
    /// Short provider identifier (e.g. "twitter").
    pub provider_ref: String,
    /// Human-readable provider name.
    pub display_name: String,
    /// Human-readable explanation of the verification step.
    pub description: String,
    /// Statically configured verification flag.
    pub verified: bool,
    /// Link to the provider's verification flow.
    pub external_url: String,
}

/// Ordered registry of attestation definitions.
///
/// The set is closed and known at deploy time; definitions are never fetched
/// or discovered at runtime. Iteration order is the registration order, and
/// that order — not selection order — determines the order of stamps on a
/// passport.
pub struct AttestationRegistry {
    definitions: Vec<AttestationDefinition>,
}

impl AttestationRegistry {
    /// Create a registry with the built-in providers, in fixed order:
    /// Twitter first, BrightID second.
    pub fn new() -> Self {
        Self {
            definitions: vec![
                AttestationDefinition {
                    provider_ref: "twitter".into(),
                    display_name: "Twitter".into(),
                    description: "Get verified by connecting your Twitter account.".into(),
                    verified: true,
                    external_url: "https://twitter.com".into(),
                },
                AttestationDefinition {
                    provider_ref: "brightid".into(),
                    display_name: "BrightID".into(),
                    description: "BrightID is a social identity network. Get verified by \
                                  joining a BrightID verification party."
                        .into(),
                    verified: true,
                    external_url: "https://www.brightid.org".into(),
                },
            ],
        }
    }

    /// Create an empty registry (no built-ins).
    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Register an additional definition at the end of the iteration order.
    pub fn register(&mut self, definition: AttestationDefinition) -> Result<(), PassportError> {
        if definition.provider_ref.is_empty() {
            return Err(PassportError::InvalidDefinition(
                "provider_ref must not be empty".into(),
            ));
        }
        if self.get(&definition.provider_ref).is_some() {
            return Err(PassportError::InvalidDefinition(format!(
                "duplicate provider_ref: {}",
                definition.provider_ref
            )));
        }
        self.definitions.push(definition);
        Ok(())
    }

    /// Look up a definition by provider reference.
    pub fn get(&self, provider_ref: &str) -> Option<&AttestationDefinition> {
        self.definitions
            .iter()
            .find(|d| d.provider_ref == provider_ref)
    }

    /// All definitions in fixed iteration order.
    pub fn definitions(&self) -> &[AttestationDefinition] {
        &self.definitions
    }

    /// Number of registered definitions.
    pub fn count(&self) -> usize {
        self.definitions.len()
    }
}

impl Default for AttestationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
