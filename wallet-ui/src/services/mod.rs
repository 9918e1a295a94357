//! # Backend Services
//!
//! Typed clients for everything that lives on the other side of the remote
//! call bridge.

pub mod backend;

pub use backend::{commands, BackendClient};
