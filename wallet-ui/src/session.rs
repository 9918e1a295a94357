//! # Session Store
//!
//! Holds the authenticated-wallet state for the lifetime of the process.
//! Nothing is persisted; closing the application logs the user out.
//!
//! Writes notify subscribers synchronously before the call returns, so a
//! navigation guard checking the session right after `authenticate` always
//! sees the new state.

use std::sync::Arc;

use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use tracing::info;

/// Authentication state of the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Unauthenticated,
    Authenticated { wallet_name: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

struct SessionInner {
    session: RwLock<Session>,
    subscribers: RwLock<Vec<Sender<Session>>>,
}

/// Shared session store. Clones are handles onto the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionInner {
                session: RwLock::new(Session::Unauthenticated),
                subscribers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.inner.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.read().is_authenticated()
    }

    /// Record a successful authentication. Subscribers are notified before
    /// this returns.
    pub fn authenticate(&self, wallet_name: impl Into<String>) {
        let wallet_name = wallet_name.into();
        info!(wallet = %wallet_name, "session authenticated");
        self.replace(Session::Authenticated { wallet_name });
    }

    /// Drop the authenticated session.
    pub fn logout(&self) {
        info!("session cleared");
        self.replace(Session::Unauthenticated);
    }

    /// Subscribe to session changes. The channel receives every state
    /// written after this call.
    pub fn subscribe(&self) -> Receiver<Session> {
        let (tx, rx) = async_channel::unbounded();
        self.inner.subscribers.write().push(tx);
        rx
    }

    fn replace(&self, next: Session) {
        *self.inner.session.write() = next.clone();
        self.inner
            .subscribers
            .write()
            .retain(|tx| tx.try_send(next.clone()).is_ok());
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
