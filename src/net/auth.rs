//! Authentication client: login, register, and session persistence.
//!
//! DESIGN
//! ======
//! The backend's register response is shape-flexible (bare token, token plus
//! user, user alone, varying field names), so all resolution happens in pure
//! total functions over `serde_json::Value` that the async entry points call
//! after the network hop. Persisting token and user to durable storage is the
//! side effect that flips the gateway's authorization header for every
//! subsequent request.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;
use super::http;
use super::types::{Role, User, UserWire};
use crate::util::jwt::{self, Claims};
use crate::util::storage;

/// Login endpoint. The override exists for deployments where auth lives on a
/// different host than the resource API.
pub fn login_url() -> String {
    option_env!("TASKHUB_LOGIN_URL").map_or_else(|| http::endpoint("/auth/login"), str::to_owned)
}

fn register_url() -> String {
    http::endpoint("/auth/register")
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Outcome of a register call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The backend returned a token; the caller is now signed in.
    Authenticated { token: String, user: User },
    /// The backend created the account but returned no token; the caller must
    /// log in separately.
    Unauthenticated(User),
}

/// Build a user from token claims, falling back to the submitted email when
/// the claim set omits one.
pub fn user_from_claims(claims: &Claims, fallback_email: &str) -> User {
    User {
        id: claims.subject().unwrap_or_default().to_owned(),
        name: claims.display_name().unwrap_or_default().to_owned(),
        email: claims
            .email
            .clone()
            .unwrap_or_else(|| fallback_email.to_owned()),
        role: claims.role.as_deref().map(Role::parse).unwrap_or_default(),
    }
}

fn token_field(body: &Value) -> Option<String> {
    body.get("token")
        .and_then(Value::as_str)
        .or_else(|| body.get("accessToken").and_then(Value::as_str))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

fn inline_user(body: &Value) -> Option<UserWire> {
    let candidate = body.get("user").cloned().or_else(|| {
        if body.is_object() { Some(body.clone()) } else { None }
    })?;
    serde_json::from_value(candidate).ok()
}

/// Total resolution of a register response body.
///
/// Resolution order per the session contract: a token wins and establishes a
/// session, decoding identity from the token claims first, then any inline
/// user object, then the submitted arguments. A user object without a token
/// is returned without a session. Neither is an `Auth` error; silent-null
/// behavior is deliberately not supported.
pub fn resolve_register_response(
    body: &Value,
    submitted_name: &str,
    submitted_email: &str,
) -> Result<RegisterOutcome, ApiError> {
    let inline = inline_user(body);

    if let Some(token) = token_field(body) {
        let claims = jwt::decode(&token).unwrap_or_default();
        let from_inline = inline.map(UserWire::into_user);
        let pick = |claim: Option<String>, inline_value: Option<String>, fallback: &str| {
            claim
                .filter(|v| !v.is_empty())
                .or_else(|| inline_value.filter(|v| !v.is_empty()))
                .unwrap_or_else(|| fallback.to_owned())
        };
        let user = User {
            id: pick(
                claims.subject().map(str::to_owned),
                from_inline.as_ref().map(|u| u.id.clone()),
                "",
            ),
            name: pick(
                claims.display_name().map(str::to_owned),
                from_inline.as_ref().map(|u| u.name.clone()),
                submitted_name,
            ),
            email: pick(
                claims.email.clone(),
                from_inline.as_ref().map(|u| u.email.clone()),
                submitted_email,
            ),
            role: claims
                .role
                .as_deref()
                .map(Role::parse)
                .or(from_inline.map(|u| u.role))
                .unwrap_or_default(),
        };
        return Ok(RegisterOutcome::Authenticated { token, user });
    }

    if let Some(wire) = inline {
        if wire.is_recognizable() {
            let mut user = wire.into_user();
            if user.email.is_empty() {
                user.email = submitted_email.to_owned();
            }
            return Ok(RegisterOutcome::Unauthenticated(user));
        }
    }

    Err(ApiError::Auth(
        "registration returned neither a token nor a user".to_owned(),
    ))
}

/// Persist a freshly established session. Storage failures are logged and
/// otherwise ignored; the in-memory session still works for this process.
pub fn persist_session(token: &str, user: &User) {
    if storage::write(storage::TOKEN_KEY, token).is_err() {
        log::warn!("could not persist bearer token; session will not survive reload");
    }
    if storage::save_json(storage::USER_KEY, user).is_err() {
        log::warn!("could not persist user profile");
    }
}

/// Clear the durable session entries. Safe to call with nothing stored.
pub fn clear_persisted_session() {
    let _ = storage::remove(storage::TOKEN_KEY);
    let _ = storage::remove(storage::USER_KEY);
}

/// `POST` the login endpoint and establish a session.
///
/// # Errors
///
/// `Auth` when the backend answers without a token, `Network` for transport
/// failures. Nothing is persisted on failure.
pub async fn login(email: &str, password: &str) -> Result<(String, User), ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    let response: LoginResponse = http::post_json(&login_url(), &body).await?;
    let token = response
        .token
        .ok_or_else(|| ApiError::Auth("login did not return a token".to_owned()))?;
    let claims = jwt::decode(&token).unwrap_or_default();
    let user = user_from_claims(&claims, email);
    persist_session(&token, &user);
    Ok((token, user))
}

/// `POST` the register endpoint and resolve its shape-flexible response.
/// On the authenticated outcome the session is persisted exactly as login
/// does; on the unauthenticated outcome nothing is stored.
pub async fn register(name: &str, email: &str, password: &str) -> Result<RegisterOutcome, ApiError> {
    let body = serde_json::json!({ "name": name, "email": email, "password": password });
    let response: Value = http::post_json(&register_url(), &body).await?;
    let outcome = resolve_register_response(&response, name, email)?;
    if let RegisterOutcome::Authenticated { token, user } = &outcome {
        persist_session(token, user);
    }
    Ok(outcome)
}
