//! Wallet removal mutation.
//!
//! Removing the wallet tears down the whole authenticated context: every
//! cached listing under the wallet namespace is invalidated, the session is
//! cleared, and the user lands back on the welcome screen.

use std::sync::Arc;

use tracing::info;

use crate::core::error::{AppError, Result};
use crate::core::nav::{Navigator, Notifier, Route, Toast};
use crate::hooks::error_detail;
use crate::hooks::mutation::{MutationGuard, MutationState};
use crate::query::{QueryCache, ACCOUNTS_PREFIX};
use crate::services::BackendClient;
use crate::session::SessionStore;
use crate::utils::validation::{Field, FieldError};

pub struct DeleteWalletMutation {
    client: BackendClient,
    cache: QueryCache,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    guard: MutationGuard,
    wallet_id: String,
}

impl DeleteWalletMutation {
    pub fn new(
        client: BackendClient,
        cache: QueryCache,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        wallet_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            cache,
            session,
            navigator,
            notifier,
            guard: MutationGuard::new(),
            wallet_id: wallet_id.into(),
        }
    }

    pub fn state(&self) -> MutationState {
        self.guard.state()
    }

    /// Remove the wallet, confirmed by its password.
    pub async fn submit(&self, password: &str) -> Result<()> {
        if password.trim().is_empty() {
            let err = AppError::Validation(FieldError::new(
                Field::Password,
                "The password is required",
            ));
            self.guard.reject(err.clone());
            return Err(err);
        }
        if !self.guard.try_begin() {
            return Ok(());
        }
        let outcome = self
            .client
            .remove_wallet(&self.wallet_id, password)
            .await
            .and_then(|result| {
                if result.success {
                    Ok(())
                } else {
                    Err(AppError::Backend("Wallet removal failed".to_string()))
                }
            });
        match outcome {
            Ok(()) => {
                info!(wallet = %self.wallet_id, "wallet removed");
                self.guard.succeed();
                self.cache.invalidate_prefix(ACCOUNTS_PREFIX);
                self.session.logout();
                self.navigator.navigate(Route::Welcome);
                self.notifier.notify(Toast::success("Wallet removed"));
                Ok(())
            }
            Err(err) => {
                self.guard.fail(err.clone());
                self.notifier
                    .notify(Toast::error("Failed to remove wallet", error_detail(&err)));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryKey, QueryStatus};
    use crate::services::commands;
    use crate::test_support::{MockBridge, RecordingNavigator, RecordingNotifier};
    use serde_json::json;

    fn setup(
        bridge: &MockBridge,
        cache: &QueryCache,
        session: &SessionStore,
    ) -> (DeleteWalletMutation, RecordingNavigator, RecordingNotifier) {
        let navigator = RecordingNavigator::new();
        let notifier = RecordingNotifier::new();
        let mutation = DeleteWalletMutation::new(
            BackendClient::new(Arc::new(bridge.clone())),
            cache.clone(),
            session.clone(),
            Arc::new(navigator.clone()),
            Arc::new(notifier.clone()),
            "w-1",
        );
        (mutation, navigator, notifier)
    }

    #[tokio::test]
    async fn test_success_logs_out_and_returns_to_welcome() {
        let bridge = MockBridge::new();
        bridge.script(commands::REMOVE_WALLET, Ok(json!({ "success": true })));
        let cache = QueryCache::new();
        let session = SessionStore::new();
        session.authenticate("savings");
        let (mutation, navigator, _notifier) = setup(&bridge, &cache, &session);

        mutation.submit("hunter2").await.unwrap();

        assert_eq!(
            bridge.calls()[0].1,
            json!({ "walletId": "w-1", "password": "hunter2" })
        );
        assert!(!session.is_authenticated());
        assert_eq!(navigator.last(), Some(Route::Welcome));
    }

    #[tokio::test]
    async fn test_success_sweeps_cached_account_listings() {
        let bridge = MockBridge::new();
        bridge.script(commands::REMOVE_WALLET, Ok(json!({ "success": true })));
        let cache = QueryCache::new();
        // seed a settled listing as if an account view had been open
        {
            use crate::query::{QueryLoader, QueryPolicy, RetryPolicy};
            use futures::future::BoxFuture;
            use serde_json::Value;
            let loader: QueryLoader = Arc::new(|| {
                Box::pin(async { Ok(Value::Array(vec![])) })
                    as BoxFuture<'static, std::result::Result<Value, crate::query::QueryError>>
            });
            let policy = QueryPolicy {
                retry: RetryPolicy::None,
                ..QueryPolicy::default()
            };
            let _sub = cache.subscribe(&QueryKey::accounts("w-1"), policy, loader);
            cache.fetch(&QueryKey::accounts("w-1")).await;
        }
        let session = SessionStore::new();
        let (mutation, _navigator, _notifier) = setup(&bridge, &cache, &session);

        mutation.submit("hunter2").await.unwrap();

        let entry = cache.get(&QueryKey::accounts("w-1"));
        assert_eq!(entry.status, QueryStatus::Idle);
        assert!(entry.stale);
    }

    #[tokio::test]
    async fn test_failure_keeps_session_intact() {
        let bridge = MockBridge::new();
        bridge.script(commands::REMOVE_WALLET, Err("invalid password".to_string()));
        let cache = QueryCache::new();
        let session = SessionStore::new();
        session.authenticate("savings");
        let (mutation, navigator, notifier) = setup(&bridge, &cache, &session);

        let err = mutation.submit("wrong").await.unwrap_err();

        assert_eq!(err, AppError::Backend("invalid password".to_string()));
        assert!(session.is_authenticated());
        assert!(navigator.routes().is_empty());
        assert_eq!(
            notifier.toasts()[0],
            Toast::error("Failed to remove wallet", "invalid password")
        );
    }
}
