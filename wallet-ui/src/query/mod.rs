//! # Query Layer
//!
//! Cache-backed access to backend query results.
//!
//! ## Modules
//!
//! - **[`cache`]**: The cache engine (subscriptions, coalescing,
//!   invalidation, eviction)
//! - **[`entry`]**: Observable entry snapshots and query errors
//! - **[`key`]**: Key namespace
//! - **[`policy`]**: Per-key behavior knobs
//!
//! Resource hooks in [`crate::hooks`] sit on top of this layer and give
//! each backend command a typed face.

pub mod cache;
pub mod entry;
pub mod key;
pub mod policy;

pub use cache::{QueryCache, QueryLoader, QuerySubscription};
pub use entry::{QueryEntry, QueryError, QueryStatus};
pub use key::{QueryKey, ACCOUNTS_PREFIX};
pub use policy::{CacheLifetime, QueryPolicy, RetryPolicy};
