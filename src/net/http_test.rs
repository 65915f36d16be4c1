use super::*;
use crate::util::storage;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/tasks"), format!("{}/tasks", api_base()));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn auth_header_reflects_stored_token() {
    storage::clear_all();
    assert_eq!(auth_header(), None);
    storage::write(storage::TOKEN_KEY, "t0k3n").unwrap();
    assert_eq!(auth_header(), Some("Bearer t0k3n".to_owned()));
    storage::remove(storage::TOKEN_KEY).unwrap();
    assert_eq!(auth_header(), None);
}

#[test]
fn native_get_counts_as_a_dispatch_and_fails_offline() {
    calls::reset();
    let result: Result<serde_json::Value, ApiError> =
        futures::executor::block_on(get_json(&endpoint("/tasks")));
    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(calls::total(), 1);
}
