use super::*;

fn token_with_payload(payload: &str) -> String {
    let encoded = URL_SAFE_NO_PAD.encode(payload);
    format!("header.{encoded}.signature")
}

#[test]
fn decode_extracts_subject_email_and_role() {
    let token = token_with_payload(r#"{"sub":"u1","email":"a@b.com","role":"admin"}"#);
    let claims = decode(&token).unwrap();
    assert_eq!(claims.subject(), Some("u1"));
    assert_eq!(claims.email.as_deref(), Some("a@b.com"));
    assert_eq!(claims.role.as_deref(), Some("admin"));
}

#[test]
fn decode_prefers_sub_over_id_and_name_over_full_name() {
    let token = token_with_payload(r#"{"sub":"s","id":"i","name":"N","full_name":"F"}"#);
    let claims = decode(&token).unwrap();
    assert_eq!(claims.subject(), Some("s"));
    assert_eq!(claims.display_name(), Some("N"));
}

#[test]
fn decode_falls_back_to_id_and_full_name() {
    let token = token_with_payload(r#"{"id":"i","full_name":"F"}"#);
    let claims = decode(&token).unwrap();
    assert_eq!(claims.subject(), Some("i"));
    assert_eq!(claims.display_name(), Some("F"));
}

#[test]
fn decode_ignores_unknown_claims() {
    let token = token_with_payload(r#"{"sub":"u1","iat":1,"exp":2,"custom":{"x":1}}"#);
    assert_eq!(decode(&token).unwrap().subject(), Some("u1"));
}

#[test]
fn decode_tolerates_padded_base64() {
    let padded = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"u1"}"#);
    let token = format!("h.{padded}.s");
    assert_eq!(decode(&token).unwrap().subject(), Some("u1"));
}

#[test]
fn decode_rejects_missing_segments() {
    assert_eq!(decode(""), None);
    assert_eq!(decode("onlyone"), None);
    assert_eq!(decode("two.segments"), None);
    assert_eq!(decode("a.b.c.d"), None);
}

#[test]
fn decode_rejects_invalid_base64() {
    assert_eq!(decode("h.!!!.s"), None);
}

#[test]
fn decode_rejects_non_object_payloads() {
    let token = token_with_payload("\"just a string\"");
    assert_eq!(decode(&token), None);
    let token = token_with_payload("[1,2,3]");
    assert_eq!(decode(&token), None);
    let token = token_with_payload("not json at all");
    assert_eq!(decode(&token), None);
}
