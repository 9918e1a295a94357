//! # User Action Handlers
//!
//! Free functions invoked from the `App` click methods. Each one reads the
//! relevant form buffer, spawns the hook's submit on the runtime, and
//! writes validation failures back into the form.

pub(crate) mod account;
pub(crate) mod auth;
pub(crate) mod navigation;
pub(crate) mod wallet;
