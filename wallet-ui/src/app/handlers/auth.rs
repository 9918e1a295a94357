//! Authentication action handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::AppState;
use crate::core::error::AppError;
use crate::hooks::AuthenticateMutation;

/// Handle the unlock button. Field errors land back in the form; backend
/// failures surface as toasts through the hook.
pub(crate) fn handle_authenticate_click(
    mutation: Arc<AuthenticateMutation>,
    state: Arc<RwLock<AppState>>,
) {
    let (name, password) = {
        let state = state.read();
        (
            state.authenticate.name.clone(),
            state.authenticate.password.clone(),
        )
    };
    tokio::spawn(async move {
        match mutation.submit(&name, &password).await {
            Ok(()) => state.write().authenticate.reset(),
            Err(AppError::Validation(field)) => {
                state.write().authenticate.error = Some(field);
            }
            Err(_) => {
                state.write().authenticate.password.clear();
            }
        }
    });
}
