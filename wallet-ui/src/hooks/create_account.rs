//! Account derivation mutation.
//!
//! Bound to one wallet at construction; a successful derivation invalidates
//! that wallet's account listing so mounted views reload it.

use std::sync::Arc;

use tracing::info;

use crate::core::error::{AppError, Result};
use crate::core::nav::{Notifier, Toast};
use crate::hooks::error_detail;
use crate::hooks::mutation::{MutationGuard, MutationState};
use crate::query::{QueryCache, QueryKey};
use crate::services::BackendClient;
use crate::utils::validation::validate_create_account;

pub struct CreateAccountMutation {
    client: BackendClient,
    cache: QueryCache,
    notifier: Arc<dyn Notifier>,
    guard: MutationGuard,
    wallet_id: String,
}

impl CreateAccountMutation {
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

    /// Derive a new account at `path`, protected by the wallet password.
    pub async fn submit(&self, path: &str, password: &str) -> Result<()> {
        if let Err(field) = validate_create_account(path, password) {
            let err = AppError::Validation(field);
            self.guard.reject(err.clone());
            return Err(err);
        }
        if !self.guard.try_begin() {
            return Ok(());
        }
        match self.client.create_account(&self.wallet_id, path, password).await {
            Ok(account) => {
                info!(account = %account.id, path, "account created");
                self.guard.succeed();
                self.cache.invalidate(&QueryKey::accounts(&self.wallet_id));
                self.notifier.notify(Toast::success("Account created"));
                Ok(())
            }
            Err(err) => {
                self.guard.fail(err.clone());
                self.notifier
                    .notify(Toast::error("Failed to create account", error_detail(&err)));
                Err(err)
            }
        }
    }
}
