use std::sync::RwLock;

use tokio::sync::watch;

use dpopp_core::{Did, SessionStatus};

/// An authenticated identity session.
///
/// Supplies the stable DID of the connected user and a way to observe
/// connection-status changes, so callers can re-read the passport record
/// when the session connects or disconnects.
pub trait IdentitySession: Send + Sync {
    /// Current connection status.
    fn status(&self) -> SessionStatus;

    /// The connected DID, if any. Stable for the lifetime of a connection.
    fn identifier(&self) -> Option<Did>;

    /// Subscribe to connection-status changes.
    fn subscribe(&self) -> watch::Receiver<SessionStatus>;
}

/// Session with an explicitly set DID, switchable at runtime.
///
/// Stands in for the wallet-driven session of a deployed system; tests and
/// local tools connect and disconnect it directly.
pub struct StaticSession {
    did: RwLock<Option<Did>>,
    status_tx: watch::Sender<SessionStatus>,
}

impl StaticSession {
    /// Create a session already connected as `did`.
    pub fn connected(did: Did) -> Self {
        let (status_tx, _) = watch::channel(SessionStatus::Connected);
        Self {
            did: RwLock::new(Some(did)),
            status_tx,
        }
    }

    /// Create a disconnected session.
    pub fn disconnected() -> Self {
        let (status_tx, _) = watch::channel(SessionStatus::Disconnected);
        Self {
            did: RwLock::new(None),
            status_tx,
        }
    }

    /// Connect as `did`, notifying subscribers.
    pub fn connect(&self, did: Did) {
        *self.did.write().expect("session lock poisoned") = Some(did);
        self.status_tx.send_replace(SessionStatus::Connected);
        tracing::debug!("identity session connected");
    }

    /// Disconnect, notifying subscribers.
    pub fn disconnect(&self) {
        *self.did.write().expect("session lock poisoned") = None;
        self.status_tx.send_replace(SessionStatus::Disconnected);
        tracing::debug!("identity session disconnected");
    }
}

impl IdentitySession for StaticSession {
    fn status(&self) -> SessionStatus {
        if self.did.read().expect("session lock poisoned").is_some() {
            SessionStatus::Connected
        } else {
            SessionStatus::Disconnected
        }
    }

    fn identifier(&self) -> Option<Did> {
        self.did.read().expect("session lock poisoned").clone()
    }

    fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status_tx.subscribe()
    }
}
