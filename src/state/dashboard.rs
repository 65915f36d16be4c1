//! Dashboard statistics with graceful degradation.
//!
//! DESIGN
//! ======
//! The aggregated `/tasks/dashboard` payload is backend-defined and varies by
//! deployment, so decoding is a total lenient mapping over `serde_json::Value`
//! with per-field fallbacks. When the endpoint is absent, partial, or fails,
//! statistics are computed from the raw task list instead.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashSet;

use serde_json::Value;

use crate::net::types::{Task, TaskStatus, TaskWire};

/// Aggregate statistics shown on the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub pending: u64,
    pub active_users: u64,
    /// Rounded integer percent of completed tasks.
    pub completion_rate: u64,
}

fn rate(completed: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    {
        ((completed as f64 / total as f64) * 100.0).round() as u64
    }
}

fn number(value: Option<&Value>) -> Option<u64> {
    value.and_then(Value::as_u64)
}

fn first_number(value: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| number(value.get(key)))
}

fn by_status(value: &Value, keys: &[&str]) -> Option<u64> {
    let map = value.get("byStatus")?;
    keys.iter().find_map(|key| number(map.get(key)))
}

impl TaskStats {
    /// Compute statistics from a raw task list. Active users counts distinct
    /// assigned member ids; unassigned tasks contribute nothing.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len() as u64;
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count() as u64;
        let completed = count(TaskStatus::Done);
        let assigned: HashSet<&str> = tasks
            .iter()
            .filter_map(|t| t.assignee.as_ref())
            .map(|a| a.id.as_str())
            .collect();
        Self {
            total,
            completed,
            in_progress: count(TaskStatus::InProgress),
            pending: count(TaskStatus::Pending),
            active_users: assigned.len() as u64,
            completion_rate: rate(completed, total),
        }
    }

    /// Lenient decoding of an aggregated dashboard payload. Returns `None`
    /// when the payload is not an object carrying at least one recognizable
    /// count, in which case the caller falls back to the task list.
    pub fn from_dashboard_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        let mut total = first_number(value, &["totalTasks", "total", "count"]);
        let completed = first_number(value, &["completedTasks", "completed"])
            .or_else(|| by_status(value, &["done", "Done"]));
        let in_progress = first_number(value, &["inProgressTasks", "inProgress"])
            .or_else(|| by_status(value, &["inProgress", "In Progress"]));
        let pending = first_number(value, &["pendingTasks", "pending"])
            .or_else(|| by_status(value, &["pending", "Pending"]));
        let active_users =
            first_number(value, &["activeUsers", "activeUsersCount", "users", "uniqueUsers"]);

        // A payload with only byStatus still yields a total.
        if total.is_none() {
            let sum = completed.unwrap_or(0) + in_progress.unwrap_or(0) + pending.unwrap_or(0);
            if sum > 0 {
                total = Some(sum);
            }
        }

        if total.is_none() && completed.is_none() && in_progress.is_none() && pending.is_none() {
            return None;
        }

        let total = total.unwrap_or(0);
        let completed = completed.unwrap_or(0);
        Some(Self {
            total,
            completed,
            in_progress: in_progress.unwrap_or(0),
            pending: pending.unwrap_or(0),
            active_users: active_users.unwrap_or(0),
            completion_rate: first_number(value, &["completionRate"])
                .unwrap_or_else(|| rate(completed, total)),
        })
    }
}

/// Extract an embedded task list from a dashboard payload, if it carries one.
pub fn tasks_from_dashboard(value: &Value) -> Option<Vec<Task>> {
    let array = value.get("tasks")?.as_array()?;
    let tasks = array
        .iter()
        .filter_map(|item| serde_json::from_value::<TaskWire>(item.clone()).ok())
        .map(TaskWire::into_task)
        .collect();
    Some(tasks)
}

/// Dashboard page state.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    /// Aggregated stats from the dashboard endpoint, when usable.
    pub aggregated: Option<TaskStats>,
    /// Raw task list backing the fallback computation.
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    fetch_epoch: u64,
}

impl DashboardState {
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_epoch += 1;
        self.loading = true;
        self.error = None;
        self.fetch_epoch
    }

    /// Fold a completed dashboard load into state; stale epochs are
    /// discarded. `error` is only set when no data source succeeded.
    pub fn apply_fetch(
        &mut self,
        epoch: u64,
        aggregated: Option<TaskStats>,
        tasks: Result<Vec<Task>, String>,
    ) -> bool {
        if epoch != self.fetch_epoch {
            return false;
        }
        self.loading = false;
        self.aggregated = aggregated;
        match tasks {
            Ok(tasks) => self.tasks = tasks,
            Err(message) => {
                if self.aggregated.is_none() {
                    self.error = Some(message);
                }
            }
        }
        true
    }

    /// The statistics to render: aggregated when present, computed otherwise.
    pub fn stats(&self) -> TaskStats {
        self.aggregated
            .unwrap_or_else(|| TaskStats::from_tasks(&self.tasks))
    }
}
