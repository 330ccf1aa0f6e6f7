//! dPoPP Passport — Attested record lifecycle over an identity-scoped
//! document store.
//!
//! A passport is a single document owned by a DID, holding attestation
//! stamps from a closed set of providers (Twitter, BrightID). This crate
//! provides:
//! - the static attestation registry (fixed, deploy-time provider set)
//! - the passport record model with stamp-count scoring
//! - the `PassportManager` lifecycle operations: create, get, set stamps
//!   (wholesale replace), merge stamps, remove

pub mod error;
pub mod manager;
pub mod record;
pub mod registry;

pub use error::PassportError;
pub use manager::{PassportManager, PASSPORT_ALIAS};
pub use record::{PassportRecord, Stamp};
pub use registry::{AttestationDefinition, AttestationRegistry};
