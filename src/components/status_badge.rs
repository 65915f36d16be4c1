//! Colored status pill for task tables and detail views.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::TaskStatus;

/// CSS modifier class for a status.
pub fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "status-badge status-badge--pending",
        TaskStatus::InProgress => "status-badge status-badge--in-progress",
        TaskStatus::Done => "status-badge status-badge--done",
    }
}

#[component]
pub fn StatusBadge(status: TaskStatus) -> impl IntoView {
    view! { <span class=status_class(status)>{status.as_str()}</span> }
}
