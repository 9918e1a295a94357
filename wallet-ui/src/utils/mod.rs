//! # Utility Functions
//!
//! Shared utility functions used across the wallet frontend.
//!
//! ## Modules
//!
//! - **[`validation`]**: Local form validation (required fields, password
//!   confirmation, derivation path grammar)
//! - **[`logging`]**: Tracing subscriber setup

pub mod logging;
pub mod validation;
