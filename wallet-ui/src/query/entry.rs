//! Cache entry snapshot types.
//!
//! A `QueryEntry` is the full observable state of one key: lifecycle status,
//! last settled data, last error, when the data was fetched, and whether it
//! has been invalidated since. Snapshots are cheap clones handed to
//! subscribers; mutating one never affects the cache.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Lifecycle of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched (or reset after eviction).
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load settled with data.
    Success,
    /// The last load settled with an error.
    Error,
}

/// Failure of a query load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A local prerequisite was missing; no remote call was made.
    #[error("{0}")]
    Precondition(String),
    /// The backend rejected the call; carries its raw message.
    #[error("{0}")]
    Backend(String),
}

impl From<String> for QueryError {
    fn from(msg: String) -> Self {
        QueryError::Backend(msg)
    }
}

/// Observable state of one cache key.
///
/// After a failed reload, `data` keeps the last successful value while
/// `error` carries the new failure, so views can show both.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryEntry {
    pub status: QueryStatus,
    pub data: Option<Value>,
    pub error: Option<QueryError>,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Set by invalidation; cleared when a load settles successfully.
    pub stale: bool,
}

impl QueryEntry {
    pub fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            fetched_at: None,
            stale: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    /// Deserialize the cached data into a typed value, if present and
    /// well-formed.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        self.data
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

impl Default for QueryEntry {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_typed_data() {
        let entry = QueryEntry {
            status: QueryStatus::Success,
            data: Some(json!(["word1", "word2"])),
            error: None,
            fetched_at: Some(Utc::now()),
            stale: false,
        };
        let words: Vec<String> = entry.decode().unwrap();
        assert_eq!(words, vec!["word1", "word2"]);
    }

    #[test]
    fn test_decode_absent_or_mismatched_data() {
        assert_eq!(QueryEntry::idle().decode::<Vec<String>>(), None);

        let entry = QueryEntry {
            data: Some(json!("not a list")),
            ..QueryEntry::idle()
        };
        assert_eq!(entry.decode::<Vec<String>>(), None);
    }
}
