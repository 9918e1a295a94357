//! # Backend Client
//!
//! Typed wrapper over the remote call bridge. One method per backend
//! command; each serializes arguments with the exact key names the backend
//! expects and deserializes the reply into the shared DTOs.
//!
//! Argument keys are part of the wire contract and must not be renamed.

use std::sync::Arc;

use serde_json::{json, Value};
use shared::{Account, AuthenticatedWallet, CreatedWallet, DeleteResult};
use tracing::debug;

use crate::core::bridge::WalletBridge;
use crate::core::error::{AppError, Result};

/// Backend command names.
pub mod commands {
    pub const GENERATE_MNEMONIC: &str = "generate_mnemonic";
    pub const CREATE_WALLET: &str = "create_wallet";
    pub const AUTHENTICATE: &str = "authenticate";
    pub const LIST_ACCOUNTS: &str = "list_accounts";
    pub const CREATE_ACCOUNT: &str = "create_account";
    pub const DELETE_ACCOUNT: &str = "delete_account";
    pub const REMOVE_WALLET: &str = "remove_wallet";
}

/// Typed client for the wallet backend.
#[derive(Clone)]
pub struct BackendClient {
    bridge: Arc<dyn WalletBridge>,
}

impl BackendClient {
    pub fn new(bridge: Arc<dyn WalletBridge>) -> Self {
        Self { bridge }
    }

    async fn call(&self, command: &str, args: Value) -> Result<Value> {
        debug!(command, "invoking backend");
        self.bridge
            .invoke(command, args)
            .await
            .map_err(AppError::Backend)
    }

    fn decode<T: serde::de::DeserializeOwned>(command: &str, value: Value) -> Result<T> {
        serde_json::from_value(value)
            .map_err(|e| AppError::Backend(format!("malformed {command} response: {e}")))
    }

    /// Generate a fresh recovery phrase. The backend returns the words as a
    /// list; callers get them joined with single spaces.
    pub async fn generate_mnemonic(&self) -> Result<String> {
        let value = self.call(commands::GENERATE_MNEMONIC, json!({})).await?;
        let words: Vec<String> = Self::decode(commands::GENERATE_MNEMONIC, value)?;
        Ok(words.join(" "))
    }

    pub async fn create_wallet(&self, name: &str, password: &str) -> Result<CreatedWallet> {
        let value = self
            .call(
                commands::CREATE_WALLET,
                json!({ "name": name, "password": password }),
            )
            .await?;
        Self::decode(commands::CREATE_WALLET, value)
    }

    pub async fn authenticate(&self, name: &str, password: &str) -> Result<AuthenticatedWallet> {
        let value = self
            .call(
                commands::AUTHENTICATE,
                json!({ "name": name, "password": password }),
            )
            .await?;
        Self::decode(commands::AUTHENTICATE, value)
    }

    pub async fn list_accounts(&self, wallet_id: &str) -> Result<Vec<Account>> {
        let value = self
            .call(commands::LIST_ACCOUNTS, json!({ "walletId": wallet_id }))
            .await?;
        Self::decode(commands::LIST_ACCOUNTS, value)
    }

    pub async fn create_account(
        &self,
        wallet_id: &str,
        path: &str,
        password: &str,
    ) -> Result<Account> {
        let value = self
            .call(
                commands::CREATE_ACCOUNT,
                json!({ "walletId": wallet_id, "path": path, "password": password }),
            )
            .await?;
        Self::decode(commands::CREATE_ACCOUNT, value)
    }

    pub async fn delete_account(
        &self,
        wallet_id: &str,
        account_id: &str,
        password: &str,
    ) -> Result<DeleteResult> {
        let value = self
            .call(
                commands::DELETE_ACCOUNT,
                json!({ "walletId": wallet_id, "accountId": account_id, "password": password }),
            )
            .await?;
        Self::decode(commands::DELETE_ACCOUNT, value)
    }

    pub async fn remove_wallet(&self, wallet_id: &str, password: &str) -> Result<DeleteResult> {
        let value = self
            .call(
                commands::REMOVE_WALLET,
                json!({ "walletId": wallet_id, "password": password }),
            )
            .await?;
        Self::decode(commands::REMOVE_WALLET, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockBridge;

    #[tokio::test]
    async fn test_generate_mnemonic_joins_words() {
        let bridge = MockBridge::new();
        bridge.script(
            commands::GENERATE_MNEMONIC,
            Ok(json!(["abandon", "ability", "able"])),
        );
        let client = BackendClient::new(Arc::new(bridge));

        let phrase = client.generate_mnemonic().await.unwrap();
        assert_eq!(phrase, "abandon ability able");
    }

    #[tokio::test]
    async fn test_authenticate_sends_exact_arg_keys() {
        let bridge = MockBridge::new();
        bridge.script(
            commands::AUTHENTICATE,
            Ok(json!({ "id": "w-1", "name": "savings" })),
        );
        let client = BackendClient::new(Arc::new(bridge.clone()));

        let wallet = client.authenticate("savings", "hunter2").await.unwrap();
        assert_eq!(wallet.id, "w-1");

        let calls = bridge.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, commands::AUTHENTICATE);
        assert_eq!(calls[0].1, json!({ "name": "savings", "password": "hunter2" }));
    }

    #[tokio::test]
    async fn test_create_account_sends_camel_case_wallet_id() {
        let bridge = MockBridge::new();
        bridge.script(
            commands::CREATE_ACCOUNT,
            Ok(json!({
                "id": "a-1",
                "address": "bc1qxyz",
                "network": "Testnet",
                "blockchain": "Bitcoin"
            })),
        );
        let client = BackendClient::new(Arc::new(bridge.clone()));

        client
            .create_account("w-1", "44'/0'/0'/0/0", "hunter2")
            .await
            .unwrap();

        let calls = bridge.calls();
        assert_eq!(
            calls[0].1,
            json!({ "walletId": "w-1", "path": "44'/0'/0'/0/0", "password": "hunter2" })
        );
    }

    #[tokio::test]
    async fn test_backend_rejection_surfaces_raw_message() {
        let bridge = MockBridge::new();
        bridge.script(
            commands::LIST_ACCOUNTS,
            Err("wallet not found".to_string()),
        );
        let client = BackendClient::new(Arc::new(bridge));

        let err = client.list_accounts("w-404").await.unwrap_err();
        assert_eq!(err, AppError::Backend("wallet not found".to_string()));
    }
}
