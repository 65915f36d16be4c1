//! Typed client for the `/auth/users` resource.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde::Serialize;

use super::error::ApiError;
use super::http;
use super::types::{User, UserWire};

fn users_url() -> String {
    http::endpoint("/auth/users")
}

fn user_url(id: &str) -> String {
    http::endpoint(&format!("/auth/users/{id}"))
}

fn require_id(id: &str, action: &str) -> Result<(), ApiError> {
    if id.trim().is_empty() {
        Err(ApiError::Input(format!("a user id is required to {action}")))
    } else {
        Ok(())
    }
}

/// Editable member fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateUserPayload {
    pub name: String,
    pub email: String,
}

/// `GET /auth/users`.
pub async fn get_users() -> Result<Vec<User>, ApiError> {
    let wires: Vec<UserWire> = http::get_json(&users_url()).await?;
    Ok(wires.into_iter().map(UserWire::into_user).collect())
}

/// `PUT /auth/users/:id`.
pub async fn update_user(id: &str, payload: &UpdateUserPayload) -> Result<User, ApiError> {
    require_id(id, "update them")?;
    let wire: UserWire = http::put_json(&user_url(id), payload).await?;
    Ok(wire.into_user())
}

/// `DELETE /auth/users/:id`.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    require_id(id, "remove them")?;
    http::delete(&user_url(id)).await
}
