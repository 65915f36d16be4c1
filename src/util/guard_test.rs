use super::*;
use crate::net::types::{Role, User};

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::User,
    }
}

fn authed() -> SessionState {
    SessionState {
        user: Some(user()),
        token: Some("t".to_owned()),
        loading: false,
    }
}

fn anonymous() -> SessionState {
    SessionState {
        user: None,
        token: None,
        loading: false,
    }
}

#[test]
fn loading_session_allows_everything() {
    let loading = SessionState {
        user: None,
        token: None,
        loading: true,
    };
    assert_eq!(route_decision(&loading, "/tasks"), RouteDecision::Allow);
    assert_eq!(route_decision(&loading, "/login"), RouteDecision::Allow);
}

#[test]
fn anonymous_visitor_is_sent_to_login_with_return_path() {
    assert_eq!(
        route_decision(&anonymous(), "/tasks"),
        RouteDecision::RedirectToLogin {
            return_to: "/tasks".to_owned()
        }
    );
}

#[test]
fn anonymous_visitor_may_use_auth_pages() {
    assert_eq!(route_decision(&anonymous(), "/login"), RouteDecision::Allow);
    assert_eq!(route_decision(&anonymous(), "/register"), RouteDecision::Allow);
}

#[test]
fn authenticated_user_is_bounced_off_auth_pages() {
    assert_eq!(route_decision(&authed(), "/login"), RouteDecision::RedirectToDashboard);
    assert_eq!(route_decision(&authed(), "/register"), RouteDecision::RedirectToDashboard);
    assert_eq!(route_decision(&authed(), "/users"), RouteDecision::Allow);
}

#[test]
fn login_path_carries_return_target() {
    assert_eq!(login_path_with_return("/tasks"), "/login?from=/tasks");
    assert_eq!(login_path_with_return("/dashboard"), "/login");
    assert_eq!(login_path_with_return(""), "/login");
}

#[test]
fn post_login_target_defaults_to_dashboard() {
    assert_eq!(post_login_target(None), "/dashboard");
    assert_eq!(post_login_target(Some("")), "/dashboard");
    assert_eq!(post_login_target(Some("https://evil.example")), "/dashboard");
    assert_eq!(post_login_target(Some("/login")), "/dashboard");
    assert_eq!(post_login_target(Some("/tasks")), "/tasks");
}
