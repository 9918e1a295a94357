//! Recovery phrase query hook.
//!
//! The phrase is a secret: the cache entry lives only as long as a
//! subscription does, and every fresh mount generates a new phrase. Once
//! the last subscriber drops, nothing remains in memory that the cache
//! could replay.

use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::query::{
    CacheLifetime, QueryCache, QueryEntry, QueryError, QueryKey, QueryLoader, QueryPolicy,
    QuerySubscription,
};
use crate::services::BackendClient;

pub struct MnemonicQuery {
    cache: QueryCache,
    subscription: QuerySubscription,
}

impl MnemonicQuery {
    /// Subscribe to the recovery phrase, generating one immediately.
    pub fn mount(cache: &QueryCache, client: BackendClient) -> Self {
        let policy = QueryPolicy {
            cache_lifetime: CacheLifetime::Zero,
            refetch_on_mount: true,
            ..QueryPolicy::default()
        };
        let subscription = cache.subscribe(&QueryKey::mnemonic(), policy, loader(client));
        Self {
            cache: cache.clone(),
            subscription,
        }
    }

    pub fn entry(&self) -> QueryEntry {
        self.cache.get(&QueryKey::mnemonic())
    }

    /// The generated phrase, words joined by single spaces.
    pub fn phrase(&self) -> Option<String> {
        self.entry().decode()
    }

    /// Number of words in the generated phrase.
    pub fn word_count(&self) -> usize {
        self.phrase()
            .map(|phrase| phrase.split_whitespace().count())
            .unwrap_or(0)
    }

    /// Discard the current phrase and generate another.
    pub async fn regenerate(&self) -> QueryEntry {
        self.cache.refetch(&QueryKey::mnemonic()).await
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

fn loader(client: BackendClient) -> QueryLoader {
    Arc::new(move || {
        let client = client.clone();
        Box::pin(async move {
            client
                .generate_mnemonic()
                .await
                .map(Value::String)
                .map_err(QueryError::from)
        }) as BoxFuture<'static, Result<Value, QueryError>>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryStatus;
    use crate::services::commands;
    use crate::test_support::MockBridge;
    use serde_json::json;

    fn client(bridge: &MockBridge) -> BackendClient {
        BackendClient::new(Arc::new(bridge.clone()))
    }

    #[tokio::test]
    async fn test_mount_generates_phrase() {
        let bridge = MockBridge::new();
        bridge.script(commands::GENERATE_MNEMONIC, Ok(json!(["alpha", "bravo"])));
        let cache = QueryCache::new();

        let query = MnemonicQuery::mount(&cache, client(&bridge));
        loop {
            if query.next().await.unwrap().status == QueryStatus::Success {
                break;
            }
        }
        assert_eq!(query.phrase(), Some("alpha bravo".to_string()));
        assert_eq!(query.word_count(), 2);
    }

    #[tokio::test]
    async fn test_phrase_evicted_when_hook_drops() {
        let bridge = MockBridge::new();
        bridge.script(commands::GENERATE_MNEMONIC, Ok(json!(["alpha"])));
        let cache = QueryCache::new();

        {
            let query = MnemonicQuery::mount(&cache, client(&bridge));
            loop {
                if query.next().await.unwrap().status == QueryStatus::Success {
                    break;
                }
            }
        }

        let entry = cache.get(&QueryKey::mnemonic());
        assert_eq!(entry.status, QueryStatus::Idle);
        assert_eq!(entry.data, None);
    }

    #[tokio::test]
    async fn test_regenerate_issues_new_backend_call() {
        let bridge = MockBridge::new();
        bridge.script(commands::GENERATE_MNEMONIC, Ok(json!(["one"])));
        bridge.script(commands::GENERATE_MNEMONIC, Ok(json!(["two"])));
        let cache = QueryCache::new();

        let query = MnemonicQuery::mount(&cache, client(&bridge));
        loop {
            if query.next().await.unwrap().status == QueryStatus::Success {
                break;
            }
        }

        let entry = query.regenerate().await;
        assert_eq!(entry.data, Some(json!("two")));
        assert_eq!(bridge.call_count(commands::GENERATE_MNEMONIC), 2);
    }
}
