//! Shared fakes for tests: a scriptable bridge plus recording navigation
//! and notification sinks.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::core::bridge::WalletBridge;
use crate::core::nav::{Navigator, Notifier, Route, Toast};

/// Bridge fake with per-command scripted responses. Responses are consumed
/// in order; an unscripted command rejects with a recognizable message.
#[derive(Clone)]
pub struct MockBridge {
    responses: Arc<Mutex<HashMap<String, VecDeque<Result<Value, String>>>>>,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    latency: Arc<Mutex<Duration>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            latency: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    pub fn script(&self, command: &str, response: Result<Value, String>) {
        self.responses
            .lock()
            .entry(command.to_string())
            .or_default()
            .push_back(response);
    }

    /// Delay every invocation; useful for racing concurrent callers.
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock() = latency;
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, command: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|(cmd, _)| cmd == command)
            .count()
    }
}

impl Default for MockBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletBridge for MockBridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
        self.calls.lock().push((command.to_string(), args));
        let latency = *self.latency.lock();
        if latency > Duration::ZERO {
            tokio::time::sleep(latency).await;
        }
        let response = self
            .responses
            .lock()
            .get_mut(command)
            .and_then(|queue| queue.pop_front());
        response.unwrap_or_else(|| Err(format!("unscripted command: {command}")))
    }
}

/// Navigator fake that records requested routes.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }
}

/// Notifier fake that records emitted toasts.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
