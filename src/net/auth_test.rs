use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

fn token_with_payload(payload: &str) -> String {
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn user_from_claims_maps_subject_and_role() {
    let claims = jwt::decode(&token_with_payload(
        r#"{"sub":"u1","name":"Alice","email":"alice@x.com","role":"admin"}"#,
    ))
    .unwrap();
    let user = user_from_claims(&claims, "fallback@x.com");
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@x.com");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn user_from_claims_falls_back_to_submitted_email() {
    let claims = jwt::decode(&token_with_payload(r#"{"sub":"u1"}"#)).unwrap();
    let user = user_from_claims(&claims, "me@x.com");
    assert_eq!(user.email, "me@x.com");
    assert_eq!(user.role, Role::User);
}

#[test]
fn register_with_token_authenticates_and_decodes_claims() {
    let token = token_with_payload(r#"{"sub":"u1","name":"Alice","role":"admin"}"#);
    let body = json!({ "token": token });
    let outcome = resolve_register_response(&body, "Submitted", "sub@x.com").unwrap();
    match outcome {
        RegisterOutcome::Authenticated { token: t, user } => {
            assert_eq!(t, token);
            assert_eq!(user.id, "u1");
            assert_eq!(user.name, "Alice");
            // email missing from claims and body: submitted argument wins
            assert_eq!(user.email, "sub@x.com");
            assert_eq!(user.role, Role::Admin);
        }
        RegisterOutcome::Unauthenticated(_) => panic!("expected authenticated outcome"),
    }
}

#[test]
fn register_accepts_access_token_field_name() {
    let token = token_with_payload(r#"{"sub":"u2"}"#);
    let body = json!({ "accessToken": token });
    assert!(matches!(
        resolve_register_response(&body, "N", "e@x.com"),
        Ok(RegisterOutcome::Authenticated { .. })
    ));
}

#[test]
fn register_token_plus_user_fills_gaps_from_inline_user() {
    // Opaque token: claims undecodable, inline user supplies identity.
    let body = json!({
        "token": "not-a-jwt",
        "user": { "_id": "u3", "name": "Inline", "email": "inline@x.com" }
    });
    let outcome = resolve_register_response(&body, "Submitted", "sub@x.com").unwrap();
    match outcome {
        RegisterOutcome::Authenticated { user, .. } => {
            assert_eq!(user.id, "u3");
            assert_eq!(user.name, "Inline");
            assert_eq!(user.email, "inline@x.com");
        }
        RegisterOutcome::Unauthenticated(_) => panic!("expected authenticated outcome"),
    }
}

#[test]
fn register_user_without_token_does_not_authenticate() {
    let body = json!({ "user": { "id": "u4", "name": "NoToken" } });
    let outcome = resolve_register_response(&body, "N", "e@x.com").unwrap();
    match outcome {
        RegisterOutcome::Unauthenticated(user) => {
            assert_eq!(user.id, "u4");
            assert_eq!(user.email, "e@x.com");
        }
        RegisterOutcome::Authenticated { .. } => panic!("expected unauthenticated outcome"),
    }
}

#[test]
fn register_bare_top_level_user_is_recognized() {
    let body = json!({ "_id": "u5", "name": "Bare", "email": "bare@x.com" });
    assert!(matches!(
        resolve_register_response(&body, "N", "e@x.com"),
        Ok(RegisterOutcome::Unauthenticated(user)) if user.id == "u5"
    ));
}

#[test]
fn register_with_neither_token_nor_user_is_an_auth_error() {
    let body = json!({ "message": "created" });
    assert!(matches!(
        resolve_register_response(&body, "N", "e@x.com"),
        Err(ApiError::Auth(_))
    ));
    assert!(matches!(
        resolve_register_response(&json!(null), "N", "e@x.com"),
        Err(ApiError::Auth(_))
    ));
}

#[test]
fn persist_and_clear_session_roundtrip() {
    storage::clear_all();
    let user = User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "a@x.com".to_owned(),
        role: Role::User,
    };
    persist_session("tok", &user);
    assert_eq!(storage::read(storage::TOKEN_KEY), Ok(Some("tok".to_owned())));
    let stored: Option<User> = storage::load_json(storage::USER_KEY).unwrap();
    assert_eq!(stored, Some(user));

    clear_persisted_session();
    clear_persisted_session();
    assert_eq!(storage::read(storage::TOKEN_KEY), Ok(None));
    assert_eq!(storage::read(storage::USER_KEY), Ok(None));
}

#[test]
fn failed_login_leaves_storage_untouched() {
    storage::clear_all();
    // Native builds have no browser fetch: the call fails at the gateway,
    // before any session commit.
    let result = futures::executor::block_on(login("a@x.com", "pw"));
    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(storage::read(storage::TOKEN_KEY), Ok(None));
    assert_eq!(storage::read(storage::USER_KEY), Ok(None));
}
