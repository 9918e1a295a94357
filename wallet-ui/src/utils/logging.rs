//! Tracing initialization.
//!
//! The embedding shell calls [`init`] once at startup. Filtering follows
//! `RUST_LOG` when set, otherwise defaults to info-level output for this
//! crate.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize the logging system. Safe to call more than once; subsequent
/// calls are no-ops.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wallet_ui=info,warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init();
    });
}
