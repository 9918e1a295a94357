//! # Application Events
//!
//! Results and requests flowing back to the main thread from hooks and
//! spawned tasks.

use shared::Account;

use crate::core::nav::{Route, Toast};
use crate::query::QueryError;

/// Async results sent to the main thread, drained each tick.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Recovery phrase generation settled.
    MnemonicResult(Result<String, QueryError>),
    /// Account listing settled.
    AccountsResult(Result<Vec<Account>, QueryError>),
    /// A hook or the shell requested a route change.
    NavigateTo(Route),
    /// A hook emitted a user-visible toast.
    Notify(Toast),
}
