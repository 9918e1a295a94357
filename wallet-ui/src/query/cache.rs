//! # Query Cache Engine
//!
//! Keyed store of backend query results with subscription, deduplication,
//! and invalidation.
//!
//! ## Behavior
//!
//! - **Coalescing**: at most one load per key is in flight. Concurrent
//!   `fetch` calls attach to the running load and all resolve with the same
//!   settled snapshot.
//! - **Invalidation**: marks the entry stale. With subscribers attached a
//!   reload starts (or is queued behind the in-flight one); with none the
//!   entry resets so a later subscriber starts clean.
//! - **Last write wins**: whichever load settles last owns the entry.
//! - **Eviction**: keys with [`CacheLifetime::Zero`] are dropped the moment
//!   the last subscriber detaches and no load is running.
//!
//! Locking is a single `parking_lot::RwLock` over the key map; it is never
//! held across an await point. Loads run on spawned tokio tasks and report
//! back through [`QueryCache::settle`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_channel::{Receiver, Sender};
use chrono::Utc;
use futures::future::BoxFuture;
use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::entry::{QueryEntry, QueryError, QueryStatus};
use super::key::QueryKey;
use super::policy::{CacheLifetime, QueryPolicy, RetryPolicy};

/// Fetcher invoked by the cache whenever a key needs (re)loading.
pub type QueryLoader =
    Arc<dyn Fn() -> BoxFuture<'static, Result<Value, QueryError>> + Send + Sync>;

struct KeyState {
    entry: QueryEntry,
    policy: QueryPolicy,
    loader: Option<QueryLoader>,
    listeners: Vec<(u64, Sender<QueryEntry>)>,
    in_flight: bool,
    /// An invalidation arrived while a load was running; reload once it
    /// settles.
    refetch_queued: bool,
    waiters: Vec<oneshot::Sender<QueryEntry>>,
}

impl KeyState {
    fn new() -> Self {
        Self {
            entry: QueryEntry::idle(),
            policy: QueryPolicy::default(),
            loader: None,
            listeners: Vec::new(),
            in_flight: false,
            refetch_queued: false,
            waiters: Vec::new(),
        }
    }

    /// Push a snapshot to every live listener, pruning closed ones.
    fn publish(&mut self, snapshot: &QueryEntry) {
        self.listeners
            .retain(|(_, tx)| tx.try_send(snapshot.clone()).is_ok());
    }
}

struct CacheInner {
    states: RwLock<HashMap<QueryKey, KeyState>>,
    next_listener_id: AtomicU64,
}

impl CacheInner {
    fn unsubscribe(&self, key: &QueryKey, id: u64) {
        let mut states = self.states.write();
        let Some(state) = states.get_mut(key) else {
            return;
        };
        state.listeners.retain(|(lid, _)| *lid != id);
        if state.listeners.is_empty()
            && !state.in_flight
            && matches!(state.policy.cache_lifetime, CacheLifetime::Zero)
        {
            debug!(key = %key, "evicting zero-lifetime entry");
            states.remove(key);
        }
    }
}

/// Live subscription to one cache key. Detaches on drop; dropping the last
/// subscription of a zero-lifetime key evicts its entry.
pub struct QuerySubscription {
    key: QueryKey,
    id: u64,
    receiver: Receiver<QueryEntry>,
    snapshot: QueryEntry,
    inner: Arc<CacheInner>,
}

impl QuerySubscription {
    /// Entry state at subscription time.
    pub fn snapshot(&self) -> &QueryEntry {
        &self.snapshot
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Await the next state change. `None` once the cache is gone.
    pub async fn next(&self) -> Option<QueryEntry> {
        self.receiver.recv().await.ok()
    }

    /// Non-blocking poll for a pending state change.
    pub fn try_next(&self) -> Option<QueryEntry> {
        self.receiver.try_recv().ok()
    }
}

impl Drop for QuerySubscription {
    fn drop(&mut self) {
        self.inner.unsubscribe(&self.key, self.id);
    }
}

/// Shared query cache. Clones are handles onto the same store.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<CacheInner>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CacheInner {
                states: RwLock::new(HashMap::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current snapshot of `key`, idle if the key is unknown.
    pub fn get(&self, key: &QueryKey) -> QueryEntry {
        self.inner
            .states
            .read()
            .get(key)
            .map(|state| state.entry.clone())
            .unwrap_or_default()
    }

    /// Attach a subscriber, installing `policy` and `loader` for the key.
    ///
    /// Starts a load when the entry is idle or stale, or unconditionally
    /// when the policy asks to refetch on mount. If a load is already in
    /// flight the subscriber simply observes its settlement.
    pub fn subscribe(
        &self,
        key: &QueryKey,
        policy: QueryPolicy,
        loader: QueryLoader,
    ) -> QuerySubscription {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = async_channel::unbounded();
        let (snapshot, should_fetch) = {
            let mut states = self.inner.states.write();
            let state = states.entry(key.clone()).or_insert_with(KeyState::new);
            state.policy = policy;
            state.loader = Some(loader);
            state.listeners.push((id, tx));
            let should_fetch = !state.in_flight
                && (state.entry.status == QueryStatus::Idle
                    || state.entry.stale
                    || policy.refetch_on_mount);
            (state.entry.clone(), should_fetch)
        };
        if should_fetch {
            self.start_load(key.clone());
        }
        QuerySubscription {
            key: key.clone(),
            id,
            receiver: rx,
            snapshot,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Resolve `key` to a settled entry.
    ///
    /// A fresh successful value short-circuits without touching the loader.
    /// Otherwise this joins the in-flight load, or starts one, and resolves
    /// with its settled snapshot.
    pub async fn fetch(&self, key: &QueryKey) -> QueryEntry {
        let rx = {
            let mut states = self.inner.states.write();
            let state = states.entry(key.clone()).or_insert_with(KeyState::new);
            if !state.in_flight && state.entry.status == QueryStatus::Success && !state.entry.stale
            {
                return state.entry.clone();
            }
            if !state.in_flight && state.loader.is_none() {
                return state.entry.clone();
            }
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            rx
        };
        self.start_load(key.clone());
        match rx.await {
            Ok(entry) => entry,
            Err(_) => self.get(key),
        }
    }

    /// Force a reload even if the cached value is fresh. Joins the
    /// in-flight load when one is running.
    pub async fn refetch(&self, key: &QueryKey) -> QueryEntry {
        let rx = {
            let mut states = self.inner.states.write();
            let Some(state) = states.get_mut(key) else {
                return QueryEntry::idle();
            };
            if !state.in_flight && state.loader.is_none() {
                return state.entry.clone();
            }
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            rx
        };
        self.start_load(key.clone());
        match rx.await {
            Ok(entry) => entry,
            Err(_) => self.get(key),
        }
    }

    /// Mark `key` stale.
    ///
    /// With subscribers attached (and the policy's consent) a reload starts,
    /// queued behind the in-flight one if necessary. With no subscribers the
    /// entry resets to idle so a later subscriber fetches from scratch
    /// instead of replaying the stale value.
    pub fn invalidate(&self, key: &QueryKey) {
        let start = {
            let mut states = self.inner.states.write();
            let Some(state) = states.get_mut(key) else {
                return;
            };
            state.entry.stale = true;
            debug!(key = %key, "invalidated");
            if state.listeners.is_empty() {
                if !state.in_flight {
                    state.entry = QueryEntry {
                        stale: true,
                        ..QueryEntry::idle()
                    };
                }
                false
            } else if state.in_flight {
                state.refetch_queued = state.policy.refetch_on_invalidate;
                false
            } else if state.policy.refetch_on_invalidate {
                true
            } else {
                let snapshot = state.entry.clone();
                state.publish(&snapshot);
                false
            }
        };
        if start {
            self.start_load(key.clone());
        }
    }

    /// Invalidate every key under `prefix`.
    pub fn invalidate_prefix(&self, prefix: &str) {
        let keys: Vec<QueryKey> = self
            .inner
            .states
            .read()
            .keys()
            .filter(|key| key.has_prefix(prefix))
            .cloned()
            .collect();
        for key in keys {
            self.invalidate(&key);
        }
    }

    /// Begin a load for `key` on a spawned task. No-op when a load is
    /// already running or no loader is installed.
    fn start_load(&self, key: QueryKey) -> bool {
        let (loader, retry) = {
            let mut states = self.inner.states.write();
            let Some(state) = states.get_mut(&key) else {
                return false;
            };
            if state.in_flight {
                return false;
            }
            let Some(loader) = state.loader.clone() else {
                return false;
            };
            state.in_flight = true;
            state.refetch_queued = false;
            state.entry.status = QueryStatus::Loading;
            state.entry.error = None;
            if !state.policy.suspend_on_loading {
                let snapshot = state.entry.clone();
                state.publish(&snapshot);
            }
            (loader, state.policy.retry)
        };
        debug!(key = %key, "load started");
        let cache = self.clone();
        tokio::spawn(async move {
            let result = run_with_retry(&loader, retry).await;
            cache.settle(&key, result);
        });
        true
    }

    /// Record a settled load, notify listeners and waiters, then run the
    /// queued reload or evict, as the policy dictates.
    fn settle(&self, key: &QueryKey, result: Result<Value, QueryError>) {
        let queued = {
            let mut states = self.inner.states.write();
            let Some(state) = states.get_mut(key) else {
                return;
            };
            state.in_flight = false;
            match result {
                Ok(data) => {
                    state.entry = QueryEntry {
                        status: QueryStatus::Success,
                        data: Some(data),
                        error: None,
                        fetched_at: Some(Utc::now()),
                        stale: false,
                    };
                }
                Err(err) => {
                    // keep the last good value next to the new error
                    warn!(key = %key, error = %err, "load failed");
                    state.entry.status = QueryStatus::Error;
                    state.entry.error = Some(err);
                }
            }
            let settled = state.entry.clone();
            state.publish(&settled);
            for waiter in state.waiters.drain(..) {
                let _ = waiter.send(settled.clone());
            }
            let queued = state.refetch_queued;
            if !queued
                && state.listeners.is_empty()
                && matches!(state.policy.cache_lifetime, CacheLifetime::Zero)
            {
                debug!(key = %key, "evicting zero-lifetime entry");
                states.remove(key);
            }
            queued
        };
        if queued {
            self.start_load(key.clone());
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive the loader to a settled result under `retry`. Only backend errors
/// are retried; a missing precondition will not heal on its own.
async fn run_with_retry(
    loader: &QueryLoader,
    retry: RetryPolicy,
) -> Result<Value, QueryError> {
    let mut last = (loader.as_ref())().await;
    if let RetryPolicy::Limited { attempts, delay } = retry {
        let mut tries = 1u32;
        while tries < attempts.max(1) {
            match &last {
                Ok(_) | Err(QueryError::Precondition(_)) => break,
                Err(QueryError::Backend(_)) => {
                    tokio::time::sleep(delay).await;
                    last = (loader.as_ref())().await;
                    tries += 1;
                }
            }
        }
    }
    last
}
