//! Account deletion mutation.

use std::sync::Arc;

use tracing::info;

use crate::core::error::{AppError, Result};
use crate::core::nav::{Notifier, Toast};
use crate::hooks::error_detail;
use crate::hooks::mutation::{MutationGuard, MutationState};
use crate::query::{QueryCache, QueryKey};
use crate::services::BackendClient;
use crate::utils::validation::{Field, FieldError};

pub struct DeleteAccountMutation {
    client: BackendClient,
    cache: QueryCache,
    notifier: Arc<dyn Notifier>,
    guard: MutationGuard,
    wallet_id: String,
}

impl DeleteAccountMutation {
    pub fn new(
        client: BackendClient,
        cache: QueryCache,
        notifier: Arc<dyn Notifier>,
        wallet_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            cache,
            notifier,
            guard: MutationGuard::new(),
            wallet_id: wallet_id.into(),
        }
    }

    pub fn state(&self) -> MutationState {
        self.guard.state()
    }

    /// Delete `account_id`, confirmed by the wallet password.
    pub async fn submit(&self, account_id: &str, password: &str) -> Result<()> {
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
            .delete_account(&self.wallet_id, account_id, password)
            .await
            .and_then(|result| {
                if result.success {
                    Ok(())
                } else {
                    Err(AppError::Backend("Account deletion failed".to_string()))
                }
            });
        match outcome {
            Ok(()) => {
                info!(account = %account_id, "account deleted");
                self.guard.succeed();
                self.cache.invalidate(&QueryKey::accounts(&self.wallet_id));
                self.notifier.notify(Toast::success("Account deleted"));
                Ok(())
            }
            Err(err) => {
                self.guard.fail(err.clone());
                self.notifier
                    .notify(Toast::error("Failed to delete account", error_detail(&err)));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryStatus;
    use crate::services::commands;
    use crate::test_support::{MockBridge, RecordingNotifier};
    use serde_json::json;

    fn setup(bridge: &MockBridge, cache: &QueryCache) -> (DeleteAccountMutation, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let mutation = DeleteAccountMutation::new(
            BackendClient::new(Arc::new(bridge.clone())),
            cache.clone(),
            Arc::new(notifier.clone()),
            "w-1",
        );
        (mutation, notifier)
    }

    #[tokio::test]
    async fn test_success_invalidates_listing() {
        let bridge = MockBridge::new();
        bridge.script(commands::DELETE_ACCOUNT, Ok(json!({ "success": true })));
        let cache = QueryCache::new();
        let (mutation, _notifier) = setup(&bridge, &cache);

        mutation.submit("a-1", "hunter2").await.unwrap();

        assert_eq!(
            bridge.calls()[0].1,
            json!({ "walletId": "w-1", "accountId": "a-1", "password": "hunter2" })
        );
        assert_eq!(cache.get(&QueryKey::accounts("w-1")).status, QueryStatus::Idle);
    }

    #[tokio::test]
    async fn test_unsuccessful_result_is_an_error() {
        let bridge = MockBridge::new();
        bridge.script(commands::DELETE_ACCOUNT, Ok(json!({ "success": false })));
        let cache = QueryCache::new();
        let (mutation, notifier) = setup(&bridge, &cache);

        let err = mutation.submit("a-1", "hunter2").await.unwrap_err();
        assert_eq!(err, AppError::Backend("Account deletion failed".to_string()));
        assert_eq!(
            notifier.toasts()[0],
            Toast::error("Failed to delete account", "Account deletion failed")
        );
    }

    #[tokio::test]
    async fn test_missing_password_fails_locally() {
        let bridge = MockBridge::new();
        let cache = QueryCache::new();
        let (mutation, _notifier) = setup(&bridge, &cache);

        assert!(mutation.submit("a-1", "  ").await.is_err());
        assert!(bridge.calls().is_empty());
    }
}
