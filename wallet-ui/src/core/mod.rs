//! # Core Abstractions
//!
//! Foundational traits and error types used throughout the frontend:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`bridge`]**: The opaque remote-call boundary to the backend process
//! - **[`nav`]**: Navigation and notification interfaces produced by this
//!   layer, rendered elsewhere
//!
//! The traits exist for dependency injection: every consumer takes
//! `Arc<dyn WalletBridge>` / `Arc<dyn Navigator>` / `Arc<dyn Notifier>` so
//! tests can substitute recording fakes.

pub mod bridge;
pub mod error;
pub mod nav;

pub use bridge::WalletBridge;
pub use error::{AppError, Result};
pub use nav::{Navigator, Notifier, Route, Toast, ToastLevel};
