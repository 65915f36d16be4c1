//! Wire DTOs and normalization for the REST backend.
//!
//! DESIGN
//! ======
//! The backend is shape-flexible in several places: ids arrive as `_id` or
//! `id`, `assignedTo` is a bare id string or an expanded user object, status
//! strings and timestamps may be missing. Each flexible payload gets a wire
//! struct plus a total `into_*` mapping into a strict domain type, so no
//! optional-chaining leaks into view code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role. Unknown role strings normalize to `User`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::User
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// A team member. Also the shape persisted to durable storage under the
/// `user` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// User payload as the backend sends it; every field is optional and ids may
/// be spelled `_id` or `id`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWire {
    #[serde(rename = "_id", default)]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserWire {
    /// Unified identifier, preferring `_id`.
    pub fn unified_id(&self) -> Option<String> {
        let id = self.mongo_id.clone().or_else(|| self.id.clone());
        id.filter(|s| !s.is_empty())
    }

    /// Whether the payload carries enough to count as a user at all.
    pub fn is_recognizable(&self) -> bool {
        self.unified_id().is_some() || self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn into_user(self) -> User {
        User {
            id: self.unified_id().unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role: self.role.as_deref().map(Role::parse).unwrap_or_default(),
        }
    }
}

/// Task lifecycle status with its exact wire spellings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Parse a wire status string; anything unrecognized reads as `Pending`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "In Progress" => Self::InProgress,
            "Done" => Self::Done,
            _ => Self::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `assignedTo` as the backend sends it: a bare id string or an expanded
/// user object. `null`/absent decodes as `None` at the field level.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AssigneeWire {
    Id(String),
    Expanded(UserWire),
}

/// Normalized assignee for display and form preselection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignee {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Assignee {
    /// Best display string: name, else email, else the raw id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.email.as_deref().filter(|e| !e.is_empty()))
            .unwrap_or(&self.id)
    }
}

/// Total mapping from the wire shape to an optional assignee. Empty id
/// strings and unrecognizable objects mean "unassigned".
pub fn normalize_assignee(wire: Option<AssigneeWire>) -> Option<Assignee> {
    match wire {
        None => None,
        Some(AssigneeWire::Id(id)) if id.is_empty() => None,
        Some(AssigneeWire::Id(id)) => Some(Assignee {
            id,
            name: None,
            email: None,
        }),
        Some(AssigneeWire::Expanded(user)) => {
            if !user.is_recognizable() && user.email.as_deref().unwrap_or_default().is_empty() {
                return None;
            }
            Some(Assignee {
                id: user.unified_id().unwrap_or_default(),
                name: user.name.filter(|n| !n.is_empty()),
                email: user.email.filter(|e| !e.is_empty()),
            })
        }
    }
}

/// Parse a date-like field, defaulting to the current time when absent or
/// unparseable. After this a missing timestamp is indistinguishable from one
/// set to now; accepted trade-off, the UI only ever renders these.
pub fn normalize_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

/// Task payload as the backend sends it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWire {
    #[serde(rename = "_id", default)]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<AssigneeWire>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TaskWire {
    pub fn into_task(self) -> Task {
        Task {
            id: self.mongo_id.or(self.id).unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            assignee: normalize_assignee(self.assigned_to),
            status: self.status.as_deref().map(TaskStatus::parse).unwrap_or_default(),
            created_at: normalize_timestamp(self.created_at.as_deref()),
            updated_at: normalize_timestamp(self.updated_at.as_deref()),
        }
    }
}

/// A task as held in view state. The backend owns the durable copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assignee: Option<Assignee>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Assignee id for form preselection; empty string means unassigned.
    pub fn assignee_id(&self) -> String {
        self.assignee.as_ref().map(|a| a.id.clone()).unwrap_or_default()
    }

    /// Assignee display string for tables and detail views.
    pub fn assignee_display(&self) -> String {
        self.assignee
            .as_ref()
            .map_or_else(|| "Not assigned".to_owned(), |a| a.display_name().to_owned())
    }
}
