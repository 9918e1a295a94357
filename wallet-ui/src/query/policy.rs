//! Per-key cache behavior knobs.

use std::time::Duration;

/// How a failing loader is retried before the entry settles in error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Single attempt, the first failure settles the entry.
    None,
    /// Up to `attempts` total attempts with a fixed pause between them.
    Limited { attempts: u32, delay: Duration },
}

/// How long a settled value survives once nobody observes the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLifetime {
    /// Kept until an explicit invalidation.
    UntilInvalidated,
    /// Evicted as soon as the last subscriber detaches. Used for secrets
    /// that must never be replayed from cache (the recovery phrase).
    Zero,
}

/// Behavior of one cache key. Set at subscription time; the most recent
/// subscriber's policy wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicy {
    pub retry: RetryPolicy,
    pub cache_lifetime: CacheLifetime,
    /// Force a refetch on every new subscription, even if the cached value
    /// is fresh.
    pub refetch_on_mount: bool,
    /// Automatically reload after invalidation while subscribers exist.
    pub refetch_on_invalidate: bool,
    /// Suppress `Loading` notifications; subscribers only see settled
    /// states. Lets a view keep showing the previous value during reloads.
    pub suspend_on_loading: bool,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::Limited {
                attempts: 3,
                delay: Duration::from_millis(500),
            },
            cache_lifetime: CacheLifetime::UntilInvalidated,
            refetch_on_mount: false,
            refetch_on_invalidate: true,
            suspend_on_loading: false,
        }
    }
}
