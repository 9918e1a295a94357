//! Wallet authentication mutation.
//!
//! On success the session store is written before navigation is requested,
//! so the account screen's guard sees an authenticated session when it
//! mounts.

use std::sync::Arc;

use tracing::info;

use crate::core::error::{AppError, Result};
use crate::core::nav::{Navigator, Notifier, Route, Toast};
use crate::hooks::error_detail;
use crate::hooks::mutation::{MutationGuard, MutationState};
use crate::services::BackendClient;
use crate::session::SessionStore;
use crate::utils::validation::validate_credentials;

pub struct AuthenticateMutation {
    client: BackendClient,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    guard: MutationGuard,
}

impl AuthenticateMutation {
    pub fn new(
        client: BackendClient,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            session,
            navigator,
            notifier,
            guard: MutationGuard::new(),
        }
    }

    pub fn state(&self) -> MutationState {
        self.guard.state()
    }

    pub async fn submit(&self, name: &str, password: &str) -> Result<()> {
        if let Err(field) = validate_credentials(name, password) {
            let err = AppError::Validation(field);
            self.guard.reject(err.clone());
            return Err(err);
        }
        if !self.guard.try_begin() {
            return Ok(());
        }
        match self.client.authenticate(name, password).await {
            Ok(wallet) => {
                info!(wallet = %wallet.name, "authenticated");
                self.guard.succeed();
                self.session.authenticate(wallet.name.clone());
                self.navigator
                    .navigate(Route::Accounts { wallet_id: wallet.id });
                self.notifier.notify(Toast::success("Wallet unlocked"));
                Ok(())
            }
            Err(err) => {
                self.guard.fail(err.clone());
                self.notifier
                    .notify(Toast::error("Authentication failed", error_detail(&err)));
                Err(err)
            }
        }
    }
}
