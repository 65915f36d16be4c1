//! Route guarding over session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: unauthenticated
//! visitors land on `/login` carrying the path they asked for, and signed-in
//! users are bounced off the auth-only pages.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Landing route for authenticated users.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Route of the login page.
pub const LOGIN_PATH: &str = "/login";

/// What the router should do with a requested path given the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested route.
    Allow,
    /// Send the visitor to the login page, remembering where they wanted to go.
    RedirectToLogin { return_to: String },
    /// Send an already-authenticated user to the dashboard.
    RedirectToDashboard,
}

fn is_auth_page(path: &str) -> bool {
    matches!(path, "/login" | "/register")
}

/// Pure routing decision. While the session is still hydrating nothing is
/// decided yet, so the route renders and re-evaluates once loading settles.
pub fn route_decision(session: &SessionState, path: &str) -> RouteDecision {
    if session.loading {
        return RouteDecision::Allow;
    }
    let authenticated = session.user.is_some();
    if authenticated && is_auth_page(path) {
        return RouteDecision::RedirectToDashboard;
    }
    if !authenticated && !is_auth_page(path) {
        return RouteDecision::RedirectToLogin {
            return_to: path.to_owned(),
        };
    }
    RouteDecision::Allow
}

/// Login URL carrying the originally requested path as `from` query state.
pub fn login_path_with_return(return_to: &str) -> String {
    if return_to.is_empty() || return_to == DASHBOARD_PATH {
        LOGIN_PATH.to_owned()
    } else {
        format!("{LOGIN_PATH}?from={return_to}")
    }
}

/// Where to navigate after a successful login. Only same-app absolute paths
/// that are not themselves auth pages are honored.
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !is_auth_page(path) => path.to_owned(),
        _ => DASHBOARD_PATH.to_owned(),
    }
}

/// Install a reactive guard for the current route. `current_path` is read
/// inside the effect so navigation re-runs the decision.
pub fn install_route_guard<P, F>(session: RwSignal<SessionState>, current_path: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        match route_decision(&state, &current_path()) {
            RouteDecision::Allow => {}
            RouteDecision::RedirectToLogin { return_to } => {
                navigate(&login_path_with_return(&return_to), NavigateOptions::default());
            }
            RouteDecision::RedirectToDashboard => {
                navigate(DASHBOARD_PATH, NavigateOptions::default());
            }
        }
    });
}
