//! # Bitcoin Wallet Frontend - Library Root
//!
//! Presentation core of a **native desktop bitcoin wallet**. This crate
//! owns everything between the rendered widgets and the out-of-process
//! wallet backend: the query cache, the session store, the resource hooks,
//! and the application orchestrator. Rendering itself is the embedding
//! shell's job.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              wallet-ui (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - Orchestrator, screens, forms, events      │
//! │  hooks     - Per-resource query/mutation hooks         │
//! │  query     - Keyed cache with coalescing/invalidation  │
//! │  session   - In-memory authentication state            │
//! │  services  - Typed backend client                      │
//! │  core      - Bridge, navigation, notification traits   │
//! └───────────────────────────┬────────────────────────────┘
//!                             │ invoke(command, args)
//!                             ▼
//!                 ┌─────────────────────────┐
//!                 │   Wallet backend        │
//!                 │   (keys, storage)       │
//!                 └─────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The main thread drains an **async channel** each tick:
//! - Main thread: applies events to state and serves render reads
//! - Async tasks: backend calls through the bridge (multi-threaded Tokio)
//!
//! ### Query Cache
//!
//! Backend reads go through [`query::QueryCache`]: one load in flight per
//! key, explicit invalidation, per-key retry and lifetime policies. The
//! recovery phrase uses a zero lifetime so it never outlives its screen.
//!
//! ### Session
//!
//! [`session::SessionStore`] holds the authenticated wallet in memory only.
//! Guarded routes resolve to the unlock screen while it is clear.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wallet_ui::app::App;
//!
//! let mut app = App::new(bridge);   // bridge: Arc<dyn WalletBridge>
//! loop {
//!     app.on_tick();
//!     let state = app.state.read();
//!     // render from state, then drop the lock
//! }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib
//! cargo test --lib query::cache::tests
//! ```

// All modules are public to enable library usage and testing
pub mod app;
pub mod core;
pub mod hooks;
pub mod query;
pub mod services;
pub mod session;
pub mod utils;

#[cfg(test)]
mod test_support;

// Most frequently used types for consumers of this library
pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result, Route, Toast, WalletBridge};
pub use query::{QueryCache, QueryEntry, QueryStatus};
pub use session::{Session, SessionStore};
