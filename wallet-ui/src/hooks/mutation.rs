//! Mutation lifecycle guard.
//!
//! Every mutation hook owns one guard. It enforces the submit lifecycle:
//! idle, submitting, back to idle with the error (if any) retained for the
//! form to display. Submitting while a submit is running is a no-op rather
//! than a second backend call.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    Idle,
    Submitting,
}

/// Observable state of one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationState {
    pub status: MutationStatus,
    /// Last failure; cleared when the next submit begins.
    pub error: Option<AppError>,
}

impl MutationState {
    fn idle() -> Self {
        Self {
            status: MutationStatus::Idle,
            error: None,
        }
    }
}

/// Shared handle to a mutation's state.
#[derive(Clone)]
pub struct MutationGuard {
    inner: Arc<Mutex<MutationState>>,
}

impl MutationGuard {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MutationState::idle())),
        }
    }

    pub fn state(&self) -> MutationState {
        self.inner.lock().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.lock().status == MutationStatus::Submitting
    }

    /// Enter the submitting state. Returns `false` (and changes nothing)
    /// when a submit is already running.
    pub fn try_begin(&self) -> bool {
        let mut state = self.inner.lock();
        if state.status == MutationStatus::Submitting {
            return false;
        }
        state.status = MutationStatus::Submitting;
        state.error = None;
        true
    }

    pub fn succeed(&self) {
        *self.inner.lock() = MutationState::idle();
    }

    pub fn fail(&self, error: AppError) {
        let mut state = self.inner.lock();
        state.status = MutationStatus::Idle;
        state.error = Some(error);
    }

    /// Record a validation failure without entering the submit lifecycle.
    pub fn reject(&self, error: AppError) {
        let mut state = self.inner.lock();
        if state.status == MutationStatus::Idle {
            state.error = Some(error);
        }
    }
}

impl Default for MutationGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_idle_submitting_idle() {
        let guard = MutationGuard::new();
        assert!(guard.try_begin());
        assert!(guard.is_submitting());
        guard.succeed();
        assert_eq!(guard.state(), MutationState::idle());
    }

    #[test]
    fn test_begin_while_submitting_is_refused() {
        let guard = MutationGuard::new();
        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        assert!(guard.is_submitting());
    }

    #[test]
    fn test_failure_returns_to_idle_with_error_retained() {
        let guard = MutationGuard::new();
        guard.try_begin();
        guard.fail(AppError::Backend("nope".to_string()));
        let state = guard.state();
        assert_eq!(state.status, MutationStatus::Idle);
        assert_eq!(state.error, Some(AppError::Backend("nope".to_string())));

        // next submit clears the stale error
        assert!(guard.try_begin());
        assert_eq!(guard.state().error, None);
    }
}
