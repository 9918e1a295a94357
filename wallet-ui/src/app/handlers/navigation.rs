//! Route resolution and the authentication guard.

use tracing::warn;

use crate::app::state::Screen;
use crate::core::nav::Route;
use crate::session::SessionStore;

/// Screen rendered for a route.
pub(crate) fn screen_for(route: &Route) -> Screen {
    match route {
        Route::Welcome => Screen::Welcome,
        Route::Mnemonic => Screen::Mnemonic,
        Route::Authenticate => Screen::Authenticate,
        Route::Accounts { .. } => Screen::Accounts,
    }
}

/// Apply the authentication guard: guarded routes resolve to the unlock
/// screen while the session is clear.
pub(crate) fn resolve_route(session: &SessionStore, route: Route) -> Route {
    if screen_for(&route).requires_auth() && !session.is_authenticated() {
        warn!(?route, "guarded route requested without a session");
        return Route::Authenticate;
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_route_requires_session() {
        let session = SessionStore::new();
        let route = Route::Accounts {
            wallet_id: "w-1".to_string(),
        };
        assert_eq!(
            resolve_route(&session, route.clone()),
            Route::Authenticate
        );

        session.authenticate("savings");
        assert_eq!(resolve_route(&session, route.clone()), route);
    }

    #[test]
    fn test_public_routes_pass_through() {
        let session = SessionStore::new();
        for route in [Route::Welcome, Route::Mnemonic, Route::Authenticate] {
            assert_eq!(resolve_route(&session, route.clone()), route);
        }
    }
}
