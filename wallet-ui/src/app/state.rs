//! # Application State
//!
//! Render-facing state of the wallet frontend: the current screen, the
//! form buffers, and the projections of query results that views read each
//! frame.
//!
//! Shared as `Arc<RwLock<AppState>>`; locks are held briefly.

use shared::Account;

use crate::core::nav::Toast;
use crate::query::QueryError;
use crate::utils::validation::FieldError;

/// Screens of the wallet frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Mnemonic,
    Authenticate,
    Accounts,
}

impl Screen {
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Welcome,
            Screen::Mnemonic,
            Screen::Authenticate,
            Screen::Accounts,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Mnemonic => "Recovery Phrase",
            Screen::Authenticate => "Unlock Wallet",
            Screen::Accounts => "Accounts",
        }
    }

    /// Screens that may only be shown with an authenticated session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Accounts)
    }
}

/// Wallet creation form buffer.
#[derive(Debug, Clone, Default)]
pub struct CreateWalletForm {
    pub name: String,
    pub password: String,
    pub confirm_password: String,
    pub error: Option<FieldError>,
}

impl CreateWalletForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Wallet unlock form buffer.
#[derive(Debug, Clone, Default)]
pub struct AuthenticateForm {
    pub name: String,
    pub password: String,
    pub error: Option<FieldError>,
}

impl AuthenticateForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Account derivation form buffer.
#[derive(Debug, Clone, Default)]
pub struct CreateAccountForm {
    pub path: String,
    pub password: String,
    pub error: Option<FieldError>,
}

impl CreateAccountForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Password confirmation buffer for destructive actions (account or wallet
/// deletion).
#[derive(Debug, Clone, Default)]
pub struct ConfirmDeleteForm {
    pub password: String,
    pub error: Option<FieldError>,
}

impl ConfirmDeleteForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_screen: Screen,
    /// Wallet routed to on the accounts screen.
    pub current_wallet_id: Option<String>,

    pub create_wallet: CreateWalletForm,
    pub authenticate: AuthenticateForm,
    pub create_account: CreateAccountForm,
    pub confirm_delete: ConfirmDeleteForm,

    pub mnemonic: Option<String>,
    pub mnemonic_loading: bool,
    pub mnemonic_error: Option<QueryError>,

    /// Last successfully loaded listing; kept through failed reloads.
    pub accounts: Vec<Account>,
    pub accounts_loading: bool,
    pub accounts_error: Option<QueryError>,

    /// Toasts waiting to be rendered; drained by the shell each frame.
    pub pending_notifications: Vec<Toast>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Welcome,
            current_wallet_id: None,
            create_wallet: CreateWalletForm::default(),
            authenticate: AuthenticateForm::default(),
            create_account: CreateAccountForm::default(),
            confirm_delete: ConfirmDeleteForm::default(),
            mnemonic: None,
            mnemonic_loading: false,
            mnemonic_error: None,
            accounts: Vec::new(),
            accounts_loading: false,
            accounts_error: None,
            pending_notifications: Vec::new(),
        }
    }

    /// Clear everything tied to the authenticated wallet.
    pub fn clear_wallet_context(&mut self) {
        self.current_wallet_id = None;
        self.accounts.clear();
        self.accounts_loading = false;
        self.accounts_error = None;
        self.create_account.reset();
        self.confirm_delete.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
