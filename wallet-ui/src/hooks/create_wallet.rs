//! Wallet creation mutation.

use std::sync::Arc;

use tracing::info;

use crate::core::error::{AppError, Result};
use crate::core::nav::{Navigator, Notifier, Route, Toast};
use crate::hooks::error_detail;
use crate::hooks::mutation::{MutationGuard, MutationState};
use crate::services::BackendClient;
use crate::utils::validation::validate_create_wallet;

pub struct CreateWalletMutation {
    client: BackendClient,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    guard: MutationGuard,
}

impl CreateWalletMutation {
    pub fn new(
        client: BackendClient,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            navigator,
            notifier,
            guard: MutationGuard::new(),
        }
    }

    pub fn state(&self) -> MutationState {
        self.guard.state()
    }

    /// Create a wallet from the confirmed form. On success the user is sent
    /// to the authentication screen to unlock the new wallet.
    pub async fn submit(&self, name: &str, password: &str, confirm: &str) -> Result<()> {
        if let Err(field) = validate_create_wallet(name, password, confirm) {
            let err = AppError::Validation(field);
            self.guard.reject(err.clone());
            return Err(err);
        }
        if !self.guard.try_begin() {
            return Ok(());
        }
        match self.client.create_wallet(name, password).await {
            Ok(wallet) => {
                info!(wallet = %wallet.name, "wallet created");
                self.guard.succeed();
                self.notifier.notify(Toast::success("Wallet created"));
                self.navigator.navigate(Route::Authenticate);
                Ok(())
            }
            Err(err) => {
                self.guard.fail(err.clone());
                self.notifier
                    .notify(Toast::error("Failed to create wallet", error_detail(&err)));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::commands;
    use crate::test_support::{MockBridge, RecordingNavigator, RecordingNotifier};
    use crate::utils::validation::Field;
    use serde_json::json;

    fn setup(bridge: &MockBridge) -> (CreateWalletMutation, RecordingNavigator, RecordingNotifier) {
        let navigator = RecordingNavigator::new();
        let notifier = RecordingNotifier::new();
        let mutation = CreateWalletMutation::new(
            BackendClient::new(Arc::new(bridge.clone())),
            Arc::new(navigator.clone()),
            Arc::new(notifier.clone()),
        );
        (mutation, navigator, notifier)
    }

    #[tokio::test]
    async fn test_success_navigates_to_authentication() {
        let bridge = MockBridge::new();
        bridge.script(commands::CREATE_WALLET, Ok(json!({ "name": "savings" })));
        let (mutation, navigator, notifier) = setup(&bridge);

        mutation.submit("savings", "hunter2", "hunter2").await.unwrap();

        assert_eq!(navigator.last(), Some(Route::Authenticate));
        assert_eq!(notifier.toasts()[0], Toast::success("Wallet created"));
        assert_eq!(mutation.state().error, None);
    }

    #[tokio::test]
    async fn test_password_mismatch_skips_backend() {
        let bridge = MockBridge::new();
        let (mutation, navigator, _notifier) = setup(&bridge);

        let err = mutation
            .submit("savings", "hunter2", "hunter3")
            .await
            .unwrap_err();

        match err {
            AppError::Validation(field) => {
                assert_eq!(field.field, Field::ConfirmPassword);
                assert_eq!(field.message, "The passwords are not matching");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(bridge.calls().is_empty());
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_backend_rejection_surfaces_raw_message() {
        let bridge = MockBridge::new();
        bridge.script(
            commands::CREATE_WALLET,
            Err("wallet name already taken".to_string()),
        );
        let (mutation, navigator, notifier) = setup(&bridge);

        let err = mutation
            .submit("savings", "hunter2", "hunter2")
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Backend("wallet name already taken".to_string()));
        assert_eq!(
            notifier.toasts()[0],
            Toast::error("Failed to create wallet", "wallet name already taken")
        );
        assert!(navigator.routes().is_empty());
        assert_eq!(mutation.state().error, Some(err));
    }
}
