//! Typed client for the `/tasks` resource.
//!
//! Every response-returning operation funnels through `TaskWire::into_task`
//! so ids, assignees, statuses, and timestamps are normalized before view
//! state ever sees them. Mutations against a specific task check the id
//! locally first; an empty id is an input error, not a backend round trip.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::http;
use super::types::{Task, TaskStatus, TaskWire};

fn tasks_url() -> String {
    http::endpoint("/tasks")
}

fn task_url(id: &str) -> String {
    http::endpoint(&format!("/tasks/{id}"))
}

fn assign_url(id: &str) -> String {
    http::endpoint(&format!("/tasks/{id}/assign"))
}

fn dashboard_url() -> String {
    http::endpoint("/tasks/dashboard")
}

fn require_id(id: &str, action: &str) -> Result<(), ApiError> {
    if id.trim().is_empty() {
        Err(ApiError::Input(format!("a task id is required to {action}")))
    } else {
        Ok(())
    }
}

/// Create payload. An unassigned selection is omitted entirely so the
/// backend applies its own default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

/// Update payload. An unassigned selection is an explicit `null`, meaning
/// "unassign". The asymmetry with create is deliberate contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
}

/// `GET /tasks`.
pub async fn get_tasks() -> Result<Vec<Task>, ApiError> {
    let wires: Vec<TaskWire> = http::get_json(&tasks_url()).await?;
    Ok(wires.into_iter().map(TaskWire::into_task).collect())
}

/// `GET /tasks/:id`.
pub async fn get_task(id: &str) -> Result<Task, ApiError> {
    require_id(id, "fetch it")?;
    let wire: TaskWire = http::get_json(&task_url(id)).await?;
    Ok(wire.into_task())
}

/// `POST /tasks`.
pub async fn create_task(payload: &CreateTaskPayload) -> Result<Task, ApiError> {
    let wire: TaskWire = http::post_json(&tasks_url(), payload).await?;
    Ok(wire.into_task())
}

/// `PUT /tasks/:id`.
pub async fn update_task(id: &str, payload: &UpdateTaskPayload) -> Result<Task, ApiError> {
    require_id(id, "update it")?;
    let wire: TaskWire = http::put_json(&task_url(id), payload).await?;
    Ok(wire.into_task())
}

/// `DELETE /tasks/:id`.
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    require_id(id, "delete it")?;
    http::delete(&task_url(id)).await
}

/// `POST /tasks/:id/assign`.
pub async fn assign_task(id: &str, user_id: &str) -> Result<Task, ApiError> {
    require_id(id, "assign it")?;
    let body = serde_json::json!({ "userId": user_id });
    let wire: TaskWire = http::post_json(&assign_url(id), &body).await?;
    Ok(wire.into_task())
}

/// `GET /tasks/dashboard`. The payload shape is backend-defined; callers
/// decode it leniently and fall back to the raw task list.
pub async fn get_dashboard() -> Result<Value, ApiError> {
    http::get_json(&dashboard_url()).await
}
