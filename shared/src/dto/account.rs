use serde::{Deserialize, Serialize};

/// Network an account lives on.
///
/// Serialized with the capitalized variant name (`"Testnet"` / `"Mainnet"`),
/// which is what the backend emits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountNetwork {
    Testnet,
    Mainnet,
}

/// Blockchain an account belongs to. Bitcoin only for now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountBlockchain {
    Bitcoin,
}

/// A derived account as returned by the backend.
///
/// Identity is `id`; uniqueness is enforced backend-side. The frontend treats
/// accounts as read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub address: String,
    pub network: AccountNetwork,
    pub blockchain: AccountBlockchain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_wire_format_round_trip() {
        let json = r#"{
            "id": "acc-1",
            "address": "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
            "network": "Testnet",
            "blockchain": "Bitcoin"
        }"#;

        let account: Account = serde_json::from_str(json).expect("valid account JSON");
        assert_eq!(account.id, "acc-1");
        assert_eq!(account.network, AccountNetwork::Testnet);
        assert_eq!(account.blockchain, AccountBlockchain::Bitcoin);

        let back = serde_json::to_value(&account).expect("serializable");
        assert_eq!(back["network"], "Testnet");
        assert_eq!(back["blockchain"], "Bitcoin");
    }

    #[test]
    fn test_mainnet_variant_name() {
        let network: AccountNetwork =
            serde_json::from_str("\"Mainnet\"").expect("valid network");
        assert_eq!(network, AccountNetwork::Mainnet);
    }
}
