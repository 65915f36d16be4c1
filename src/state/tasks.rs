//! Task-list view state: collection, fetch lifecycle, and modal targets.
//!
//! DESIGN
//! ======
//! Fetches are keyed by an epoch counter bumped at fetch start. A response
//! that completes after a newer fetch began (or after the page re-mounted) is
//! stale and is discarded without touching state, so an in-flight response
//! can never clobber a different view instance.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::error::ApiError;
use crate::net::types::Task;

/// State for the tasks page: the list itself plus create/edit/delete flows.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    fetch_epoch: u64,

    /// Create-task modal visibility.
    pub show_create: bool,
    /// Task open in the edit modal.
    pub editing: Option<Task>,
    /// Task awaiting delete confirmation.
    pub delete_candidate: Option<Task>,
    pub delete_busy: bool,
    pub delete_error: Option<String>,
}

impl TasksState {
    /// Start a list fetch; returns the epoch the completion must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_epoch += 1;
        self.loading = true;
        self.error = None;
        self.fetch_epoch
    }

    /// Fold a fetch completion into state. Stale epochs are discarded;
    /// returns whether the completion was applied.
    pub fn apply_fetch(&mut self, epoch: u64, result: Result<Vec<Task>, ApiError>) -> bool {
        if epoch != self.fetch_epoch {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(error) => self.error = Some(error.to_string()),
        }
        true
    }

    /// Open the delete-confirmation modal for `task`.
    pub fn request_delete(&mut self, task: Task) {
        self.delete_candidate = Some(task);
        self.delete_error = None;
    }

    /// Dismiss the delete-confirmation modal.
    pub fn cancel_delete(&mut self) {
        self.delete_candidate = None;
        self.delete_busy = false;
        self.delete_error = None;
    }

    pub fn begin_delete(&mut self) {
        self.delete_busy = true;
        self.delete_error = None;
    }

    /// Fold a delete completion into state. On success the modal closes and
    /// the caller must re-fetch exactly once (the mutation is already
    /// considered successful even if that re-fetch fails). On failure the
    /// modal stays open with an inline error so the user can retry or cancel.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> bool {
        self.delete_busy = false;
        match result {
            Ok(()) => {
                self.delete_candidate = None;
                self.delete_error = None;
                true
            }
            Err(error) => {
                self.delete_error = Some(error.to_string());
                false
            }
        }
    }
}
