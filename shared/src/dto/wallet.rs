use serde::{Deserialize, Serialize};

/// Response of a successful `create_wallet` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedWallet {
    pub name: String,
}

/// Response of a successful `authenticate` call.
///
/// `id` parameterizes the account-listing route; `name` becomes the session's
/// wallet identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedWallet {
    pub id: String,
    pub name: String,
}

/// Response of `delete_account` / `remove_wallet`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResult {
    pub success: bool,
}
