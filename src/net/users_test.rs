use super::*;
use crate::net::http::calls;
use futures::executor::block_on;

#[test]
fn urls_are_rooted_at_the_api_base() {
    assert!(users_url().ends_with("/auth/users"));
    assert!(user_url("u1").ends_with("/auth/users/u1"));
}

#[test]
fn mutations_with_empty_id_fail_before_any_network_call() {
    calls::reset();
    let payload = UpdateUserPayload {
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
    };
    assert!(matches!(block_on(update_user("", &payload)), Err(ApiError::Input(_))));
    assert!(matches!(block_on(delete_user(" ")), Err(ApiError::Input(_))));
    assert_eq!(calls::total(), 0);
}

#[test]
fn update_payload_serializes_plain_fields() {
    let payload = UpdateUserPayload {
        name: "Alice".to_owned(),
        email: "alice@x.com".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value, serde_json::json!({ "name": "Alice", "email": "alice@x.com" }));
}
