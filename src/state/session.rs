//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided from the app root and injected
//! into every component that needs identity: the route guard, page headers,
//! and the login/register flows. The signal is the only in-memory session;
//! durable storage is the sole channel to the HTTP gateway's authorization
//! header, so committing or clearing a session here is what flips the header
//! for all subsequent requests from any page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::auth;
use crate::net::types::User;
use crate::util::{jwt, storage};

/// Authentication state tracking the current user and hydration status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until startup hydration has run once.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// A settled session with a signed-in user. Login and register commit
    /// through this single constructor so there is never an observable state
    /// with a token but no user.
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
        }
    }

    /// A settled session with nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Reconstruct session state from durable storage at startup.
///
/// A stored user is trusted as-is. With only a token stored, identity is
/// mined from the token claims and persisted back for the next load; if the
/// token does not decode, no user is hydrated (the token stays stored, so
/// requests keep carrying it until logout). Storage failures hydrate an
/// anonymous session rather than failing startup.
pub fn hydrate() -> SessionState {
    let token = storage::read(storage::TOKEN_KEY).ok().flatten();
    let stored_user: Option<User> = storage::load_json(storage::USER_KEY).ok().flatten();

    if let Some(user) = stored_user {
        return SessionState {
            user: Some(user),
            token,
            loading: false,
        };
    }

    if let Some(token) = token {
        if let Some(claims) = jwt::decode(&token) {
            let user = auth::user_from_claims(&claims, "");
            if storage::save_json(storage::USER_KEY, &user).is_err() {
                log::warn!("could not persist hydrated user profile");
            }
            return SessionState {
                user: Some(user),
                token: Some(token),
                loading: false,
            };
        }
        log::debug!("stored token did not decode; hydrating without a user");
        return SessionState {
            user: None,
            token: Some(token),
            loading: false,
        };
    }

    SessionState::anonymous()
}

/// Clear the durable session entries and return the anonymous in-memory
/// state to commit. Idempotent; safe with no active session.
pub fn logout() -> SessionState {
    auth::clear_persisted_session();
    SessionState::anonymous()
}
