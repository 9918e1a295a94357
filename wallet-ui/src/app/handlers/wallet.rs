//! Wallet lifecycle action handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::AppState;
use crate::core::error::AppError;
use crate::hooks::{CreateWalletMutation, DeleteWalletMutation};
use crate::query::{QueryCache, QueryKey};

pub(crate) fn handle_create_wallet_click(
    mutation: Arc<CreateWalletMutation>,
    state: Arc<RwLock<AppState>>,
) {
    let (name, password, confirm) = {
        let state = state.read();
        (
            state.create_wallet.name.clone(),
            state.create_wallet.password.clone(),
            state.create_wallet.confirm_password.clone(),
        )
    };
    tokio::spawn(async move {
        match mutation.submit(&name, &password, &confirm).await {
            Ok(()) => state.write().create_wallet.reset(),
            Err(AppError::Validation(field)) => {
                state.write().create_wallet.error = Some(field);
            }
            Err(_) => {}
        }
    });
}

pub(crate) fn handle_delete_wallet_click(
    mutation: Arc<DeleteWalletMutation>,
    state: Arc<RwLock<AppState>>,
) {
    let password = state.read().confirm_delete.password.clone();
    tokio::spawn(async move {
        match mutation.submit(&password).await {
            Ok(()) => state.write().confirm_delete.reset(),
            Err(AppError::Validation(field)) => {
                state.write().confirm_delete.error = Some(field);
            }
            Err(_) => {
                state.write().confirm_delete.password.clear();
            }
        }
    });
}

/// Discard the displayed recovery phrase and generate a new one.
pub(crate) fn handle_regenerate_mnemonic(cache: QueryCache) {
    tokio::spawn(async move {
        cache.refetch(&QueryKey::mnemonic()).await;
    });
}
