//! # Remote Call Bridge
//!
//! The single boundary to the out-of-process wallet backend: invoke a named
//! remote procedure with JSON arguments and await a JSON result. Everything
//! behind it (key management, storage, cryptography) is the backend's
//! business.
//!
//! The trait exists for dependency injection: production wires in whatever
//! IPC transport the shell provides, tests wire in a mock that scripts
//! responses and records calls.

use async_trait::async_trait;
use serde_json::Value;

/// Opaque remote procedure boundary.
///
/// Rejections carry the backend's raw error string; callers surface it
/// verbatim so the user sees what the backend said.
#[async_trait]
pub trait WalletBridge: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String>;
}
