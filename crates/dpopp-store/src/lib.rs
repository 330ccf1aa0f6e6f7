//! dPoPP Document Store
//!
//! The persistence seam of the passport subsystem:
//! - `IdentitySession`: who is connected, with status-change subscription
//! - `DocumentStore`: get/set/remove of named documents, scoped to the
//!   session's current DID
//! - `MemoryStore`: in-memory reference adapter (last-write-wins, atomic
//!   per call)

pub mod adapter;
pub mod error;
pub mod memory;
pub mod session;

pub use adapter::{DocumentStore, StreamRef};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use session::{IdentitySession, StaticSession};
