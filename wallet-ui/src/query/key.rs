//! Cache key namespace.
//!
//! Keys are plain strings with a path-like shape. Keys that belong to one
//! wallet share a prefix so that wallet-scoped invalidation can sweep them
//! in one call.

use std::fmt;

/// Prefix shared by all per-wallet account listings.
pub const ACCOUNTS_PREFIX: &str = "accounts/";

/// Identifies one entry in the query cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Key for the freshly generated recovery phrase.
    pub fn mnemonic() -> Self {
        Self("mnemonic".to_string())
    }

    /// Key for the account listing of one wallet.
    pub fn accounts(wallet_id: &str) -> Self {
        Self(format!("{ACCOUNTS_PREFIX}{wallet_id}"))
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_key_carries_wallet_prefix() {
        let key = QueryKey::accounts("w-123");
        assert_eq!(key.as_str(), "accounts/w-123");
        assert!(key.has_prefix(ACCOUNTS_PREFIX));
        assert!(!QueryKey::mnemonic().has_prefix(ACCOUNTS_PREFIX));
    }
}
