//! # Resource Hooks
//!
//! Typed, per-resource faces over the query cache and backend client. A
//! view mounts the hook it needs; the hook owns the cache key, policy,
//! loader, and the side effects (session writes, navigation, toasts) of its
//! operation.
//!
//! ## Queries
//!
//! - **[`mnemonic`]**: Recovery phrase generation (never cached beyond the
//!   subscription)
//! - **[`accounts`]**: Account listing for the routed wallet
//!
//! ## Mutations
//!
//! - **[`create_wallet`]**, **[`authenticate`]**, **[`create_account`]**,
//!   **[`delete_account`]**, **[`delete_wallet`]**
//!
//! All mutations share the lifecycle in [`mutation`]: local validation
//! first (no backend call on failure), one submit at a time, error retained
//! for the form after settling.

pub mod accounts;
pub mod authenticate;
pub mod create_account;
pub mod create_wallet;
pub mod delete_account;
pub mod delete_wallet;
pub mod mnemonic;
pub mod mutation;

pub use accounts::AccountsQuery;
pub use authenticate::AuthenticateMutation;
pub use create_account::CreateAccountMutation;
pub use create_wallet::CreateWalletMutation;
pub use delete_account::DeleteAccountMutation;
pub use delete_wallet::DeleteWalletMutation;
pub use mnemonic::MnemonicQuery;
pub use mutation::{MutationGuard, MutationState, MutationStatus};

use crate::core::error::AppError;

/// Raw message for toast detail lines. Backend text passes through
/// verbatim.
fn error_detail(err: &AppError) -> String {
    match err {
        AppError::Backend(msg) | AppError::Precondition(msg) => msg.clone(),
        AppError::Validation(field) => field.message.clone(),
    }
}
