//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the wallet frontend and the
//! backend process it talks to over the invoke bridge. All DTOs use JSON
//! serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto::account`]**: Account listing and creation DTOs
//! - **[`dto::wallet`]**: Wallet creation, authentication and deletion DTOs
//!
//! ## Wire Format
//!
//! - Struct field names are **snake_case** and map to snake_case JSON.
//! - Enum variants keep their capitalized Rust names on the wire
//!   (`"Testnet"`, `"Mainnet"`, `"Bitcoin"`), matching what the backend
//!   returns for accounts.
//! - All structs implement both `Serialize` and `Deserialize` for
//!   bidirectional communication.

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
