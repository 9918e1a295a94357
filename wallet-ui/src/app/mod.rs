//! # Application Orchestrator
//!
//! The main [`App`] struct wires the query cache, session store, and
//! resource hooks to the render loop of the shell.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! main thread                          tokio tasks
//! ┌─────────────────────────┐          ┌──────────────────────────┐
//! │ App                     │          │ hook submits / loaders   │
//! │  - on_tick()            │◄─events──│  - mutations (submit)    │
//! │  - handle_*_click()     │          │  - query cache loads     │
//! │  - navigate()           │──spawn──►│                          │
//! └──────────┬──────────────┘          └──────────────────────────┘
//!            │
//!   Arc<RwLock<AppState>>  read by the shell each frame
//! ```
//!
//! Hooks never touch `AppState` directly. They publish through the event
//! channel (navigation requests, toasts) or through cache subscriptions,
//! and `on_tick` folds everything into state on the main thread.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut app = App::new(bridge);
//! loop {
//!     app.on_tick();                       // drain events, poll queries
//!     let state = app.state.read();        // render from state
//!     drop(state);
//! }
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;

pub use event_handler::AppEventHandler;
pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use tracing::info;

use crate::core::bridge::WalletBridge;
use crate::core::nav::{Navigator, Notifier, Route, Toast};
use crate::hooks::{
    AccountsQuery, AuthenticateMutation, CreateAccountMutation, CreateWalletMutation,
    DeleteAccountMutation, DeleteWalletMutation, MnemonicQuery, MutationState,
};
use crate::query::{QueryCache, QueryStatus};
use crate::services::BackendClient;
use crate::session::{Session, SessionStore};

/// Navigator that forwards route requests onto the app's event channel, so
/// they are applied on the main thread.
struct ChannelNavigator {
    tx: Sender<AppEvent>,
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        let _ = self.tx.try_send(AppEvent::NavigateTo(route));
    }
}

/// Notifier that queues toasts onto the event channel.
struct ChannelNotifier {
    tx: Sender<AppEvent>,
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        let _ = self.tx.try_send(AppEvent::Notify(toast));
    }
}

/// Mutations scoped to the wallet on the accounts screen. Rebuilt on every
/// navigation there, dropped on leaving.
struct WalletHooks {
    create_account: Arc<CreateAccountMutation>,
    delete_account: Arc<DeleteAccountMutation>,
    delete_wallet: Arc<DeleteWalletMutation>,
}

/// Main application orchestrator.
pub struct App {
    /// Shared render state. Locks are held briefly.
    pub state: Arc<RwLock<AppState>>,
    /// Async results from hooks and tasks, drained in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    cache: QueryCache,
    session: SessionStore,
    client: BackendClient,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,

    create_wallet: Arc<CreateWalletMutation>,
    authenticate: Arc<AuthenticateMutation>,

    // mounted per-screen
    mnemonic_query: Option<MnemonicQuery>,
    accounts_query: Option<AccountsQuery>,
    wallet_hooks: Option<WalletHooks>,
}

impl App {
    /// Build the application over the shell-provided bridge, starting on
    /// the welcome screen with a clear session.
    pub fn new(bridge: Arc<dyn WalletBridge>) -> Self {
        let (event_tx, event_rx) = unbounded();
        let cache = QueryCache::new();
        let session = SessionStore::new();
        let client = BackendClient::new(bridge);
        let navigator: Arc<dyn Navigator> = Arc::new(ChannelNavigator {
            tx: event_tx.clone(),
        });
        let notifier: Arc<dyn Notifier> = Arc::new(ChannelNotifier { tx: event_tx });

        let create_wallet = Arc::new(CreateWalletMutation::new(
            client.clone(),
            navigator.clone(),
            notifier.clone(),
        ));
        let authenticate = Arc::new(AuthenticateMutation::new(
            client.clone(),
            session.clone(),
            navigator.clone(),
            notifier.clone(),
        ));

        info!("app initialized");
        App {
            state: Arc::new(RwLock::new(AppState::new())),
            event_rx,
            cache,
            session,
            client,
            navigator,
            notifier,
            create_wallet,
            authenticate,
            mnemonic_query: None,
            accounts_query: None,
            wallet_hooks: None,
        }
    }

    /// Process pending async results. Called once per frame; non-blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.poll_queries();
    }

    /// Request a route change, subject to the authentication guard.
    pub fn navigate(&mut self, route: Route) {
        self.handle_event(AppEvent::NavigateTo(route));
    }

    pub fn session(&self) -> Session {
        self.session.session()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn create_wallet_state(&self) -> MutationState {
        self.create_wallet.state()
    }

    pub fn authenticate_state(&self) -> MutationState {
        self.authenticate.state()
    }

    /// Drain queued toasts for the shell to render.
    pub fn take_notifications(&self) -> Vec<Toast> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    // --- click handlers -------------------------------------------------

    pub fn handle_create_wallet_click(&self) {
        handlers::wallet::handle_create_wallet_click(self.create_wallet.clone(), self.state.clone());
    }

    pub fn handle_authenticate_click(&self) {
        handlers::auth::handle_authenticate_click(self.authenticate.clone(), self.state.clone());
    }

    pub fn handle_regenerate_mnemonic_click(&self) {
        handlers::wallet::handle_regenerate_mnemonic(self.cache.clone());
    }

    pub fn handle_create_account_click(&self) {
        if let Some(hooks) = &self.wallet_hooks {
            handlers::account::handle_create_account_click(
                hooks.create_account.clone(),
                self.state.clone(),
            );
        }
    }

    pub fn handle_delete_account_click(&self, account_id: impl Into<String>) {
        if let Some(hooks) = &self.wallet_hooks {
            handlers::account::handle_delete_account_click(
                hooks.delete_account.clone(),
                self.state.clone(),
                account_id.into(),
            );
        }
    }

    pub fn handle_delete_wallet_click(&self) {
        if let Some(hooks) = &self.wallet_hooks {
            handlers::wallet::handle_delete_wallet_click(
                hooks.delete_wallet.clone(),
                self.state.clone(),
            );
        }
    }

    // --- internals ------------------------------------------------------

    /// Resolve the route through the guard, swap mounted hooks, and reset
    /// the state that belongs to the screen being left.
    fn apply_route(&mut self, route: Route) {
        let route = handlers::navigation::resolve_route(&self.session, route);
        let screen = handlers::navigation::screen_for(&route);
        info!(?route, "navigating");

        // dropping the mnemonic hook evicts the phrase from the cache
        self.mnemonic_query = None;
        self.accounts_query = None;
        self.wallet_hooks = None;

        let mut state = self.state.write();
        state.current_screen = screen;
        state.mnemonic = None;
        state.mnemonic_loading = false;
        state.mnemonic_error = None;

        match route {
            Route::Welcome => {
                state.clear_wallet_context();
                state.create_wallet.reset();
                state.authenticate.reset();
            }
            Route::Authenticate => {
                state.clear_wallet_context();
                state.authenticate.reset();
            }
            Route::Mnemonic => {
                state.mnemonic_loading = true;
                drop(state);
                self.mnemonic_query =
                    Some(MnemonicQuery::mount(&self.cache, self.client.clone()));
            }
            Route::Accounts { wallet_id } => {
                state.current_wallet_id = Some(wallet_id.clone());
                state.accounts_loading = true;
                state.accounts_error = None;
                drop(state);
                self.accounts_query = Some(AccountsQuery::mount(
                    &self.cache,
                    self.client.clone(),
                    Some(wallet_id.clone()),
                ));
                self.wallet_hooks = Some(WalletHooks {
                    create_account: Arc::new(CreateAccountMutation::new(
                        self.client.clone(),
                        self.cache.clone(),
                        self.notifier.clone(),
                        wallet_id.clone(),
                    )),
                    delete_account: Arc::new(DeleteAccountMutation::new(
                        self.client.clone(),
                        self.cache.clone(),
                        self.notifier.clone(),
                        wallet_id.clone(),
                    )),
                    delete_wallet: Arc::new(DeleteWalletMutation::new(
                        self.client.clone(),
                        self.cache.clone(),
                        self.session.clone(),
                        self.navigator.clone(),
                        self.notifier.clone(),
                        wallet_id,
                    )),
                });
            }
        }
    }

    /// Fold pending snapshots from mounted query hooks into events.
    fn poll_queries(&mut self) {
        let mut events = Vec::new();
        if let Some(query) = &self.mnemonic_query {
            while let Some(entry) = query.try_next() {
                match entry.status {
                    QueryStatus::Loading => self.state.write().mnemonic_loading = true,
                    QueryStatus::Success => {
                        events.push(AppEvent::MnemonicResult(Ok(entry
                            .decode()
                            .unwrap_or_default())));
                    }
                    QueryStatus::Error => {
                        if let Some(err) = entry.error {
                            events.push(AppEvent::MnemonicResult(Err(err)));
                        }
                    }
                    QueryStatus::Idle => {}
                }
            }
        }
        if let Some(query) = &self.accounts_query {
            while let Some(entry) = query.try_next() {
                match entry.status {
                    QueryStatus::Loading => self.state.write().accounts_loading = true,
                    QueryStatus::Success => {
                        events.push(AppEvent::AccountsResult(Ok(entry
                            .decode()
                            .unwrap_or_default())));
                    }
                    QueryStatus::Error => {
                        if let Some(err) = entry.error {
                            events.push(AppEvent::AccountsResult(Err(err)));
                        }
                    }
                    QueryStatus::Idle => {}
                }
            }
        }
        for event in events {
            self.handle_event(event);
        }
    }
}
