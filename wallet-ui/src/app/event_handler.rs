//! Event dispatch for the main thread.

use tracing::debug;

use crate::app::events::AppEvent;
use crate::app::App;

/// Processes events drained from the app's channel each tick.
pub trait AppEventHandler {
    fn handle_event(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::MnemonicResult(result) => {
                let mut state = self.state.write();
                state.mnemonic_loading = false;
                match result {
                    Ok(phrase) => {
                        state.mnemonic = Some(phrase);
                        state.mnemonic_error = None;
                    }
                    Err(err) => state.mnemonic_error = Some(err),
                }
            }
            AppEvent::AccountsResult(result) => {
                let mut state = self.state.write();
                state.accounts_loading = false;
                match result {
                    Ok(accounts) => {
                        debug!(count = accounts.len(), "account listing updated");
                        state.accounts = accounts;
                        state.accounts_error = None;
                    }
                    // listing kept as-is: the last good data stays visible
                    Err(err) => state.accounts_error = Some(err),
                }
            }
            AppEvent::NavigateTo(route) => self.apply_route(route),
            AppEvent::Notify(toast) => {
                self.state.write().pending_notifications.push(toast);
            }
        }
    }
}
