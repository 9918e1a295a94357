//! Navigation and notification interfaces.
//!
//! Rendering routes and drawing toasts is the shell's job; this layer only
//! produces the requests. Both traits are implemented by the [`crate::app`]
//! orchestrator (forwarding onto its event channel) and by recording fakes
//! in tests.

/// Client-side routes of the wallet frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Mnemonic,
    Authenticate,
    /// Account listing for one wallet. Entering it without an authenticated
    /// session is redirected by the navigation guard.
    Accounts { wallet_id: String },
}

/// Requests a route transition.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Severity of a user-visible toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// User-visible notification. `detail` carries the backend's raw error
/// string when the failure originated remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub detail: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            title: title.into(),
            detail: None,
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            title: title.into(),
            detail: Some(detail.into()),
        }
    }
}

/// Emits user-visible success/failure toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}
