//! Account listing query hook.
//!
//! Keyed per wallet so switching wallets never shows another wallet's
//! accounts. Mounting without a wallet id (a malformed route) settles in
//! error immediately, without a backend round trip.

use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;
use shared::Account;

use crate::query::{
    QueryCache, QueryEntry, QueryError, QueryKey, QueryLoader, QueryPolicy, QuerySubscription,
    RetryPolicy,
};
use crate::services::BackendClient;

pub struct AccountsQuery {
    cache: QueryCache,
    key: QueryKey,
    subscription: QuerySubscription,
}

impl AccountsQuery {
    /// Subscribe to the account listing of the routed wallet.
    pub fn mount(cache: &QueryCache, client: BackendClient, wallet_id: Option<String>) -> Self {
        let key = QueryKey::accounts(wallet_id.as_deref().unwrap_or(""));
        let policy = QueryPolicy {
            retry: RetryPolicy::None,
            refetch_on_mount: true,
            ..QueryPolicy::default()
        };
        let subscription = cache.subscribe(&key, policy, loader(client, wallet_id));
        Self {
            cache: cache.clone(),
            key,
            subscription,
        }
    }

    pub fn entry(&self) -> QueryEntry {
        self.cache.get(&self.key)
    }

    pub fn accounts(&self) -> Option<Vec<Account>> {
        self.entry().decode()
    }

    /// Mark the listing stale; a reload starts while this hook is mounted.
    pub fn invalidate(&self) {
        self.cache.invalidate(&self.key);
    }

    /// Await the next entry change.
    pub async fn next(&self) -> Option<QueryEntry> {
        self.subscription.next().await
    }

    /// Non-blocking poll for a pending entry change.
    pub fn try_next(&self) -> Option<QueryEntry> {
        self.subscription.try_next()
    }
}

fn loader(client: BackendClient, wallet_id: Option<String>) -> QueryLoader {
    Arc::new(move || {
        let client = client.clone();
        let wallet_id = wallet_id.clone();
        Box::pin(async move {
            let Some(wallet_id) = wallet_id else {
                return Err(QueryError::Precondition(
                    "no wallet id in current route".to_string(),
                ));
            };
            let accounts = client.list_accounts(&wallet_id).await?;
            serde_json::to_value(accounts)
                .map_err(|e| QueryError::Backend(format!("malformed account list: {e}")))
        }) as BoxFuture<'static, Result<Value, QueryError>>
    })
}
