//! Account action handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::AppState;
use crate::core::error::AppError;
use crate::hooks::{CreateAccountMutation, DeleteAccountMutation};

pub(crate) fn handle_create_account_click(
    mutation: Arc<CreateAccountMutation>,
    state: Arc<RwLock<AppState>>,
) {
    let (path, password) = {
        let state = state.read();
        (
            state.create_account.path.clone(),
            state.create_account.password.clone(),
        )
    };
    tokio::spawn(async move {
        match mutation.submit(&path, &password).await {
            Ok(()) => state.write().create_account.reset(),
            Err(AppError::Validation(field)) => {
                state.write().create_account.error = Some(field);
            }
            Err(_) => {
                state.write().create_account.password.clear();
            }
        }
    });
}

pub(crate) fn handle_delete_account_click(
    mutation: Arc<DeleteAccountMutation>,
    state: Arc<RwLock<AppState>>,
    account_id: String,
) {
    let password = state.read().confirm_delete.password.clone();
    tokio::spawn(async move {
        match mutation.submit(&account_id, &password).await {
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
