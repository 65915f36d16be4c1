//! Member-list view state for the users page.
//!
//! Same fetch-epoch and mutate-then-refetch contract as the tasks page, with
//! an edit-modal target instead of a create modal.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::error::ApiError;
use crate::net::types::User;

#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    fetch_epoch: u64,

    /// Member open in the edit modal.
    pub editing: Option<User>,
    /// Member awaiting delete confirmation.
    pub delete_candidate: Option<User>,
    pub busy: bool,
    pub action_error: Option<String>,
}

impl UsersState {
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_epoch += 1;
        self.loading = true;
        self.error = None;
        self.fetch_epoch
    }

    /// Fold a fetch completion into state; stale epochs are discarded.
    pub fn apply_fetch(&mut self, epoch: u64, result: Result<Vec<User>, ApiError>) -> bool {
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

    pub fn open_edit(&mut self, user: User) {
        self.editing = Some(user);
        self.action_error = None;
    }

    pub fn request_delete(&mut self, user: User) {
        self.delete_candidate = Some(user);
        self.action_error = None;
    }

    pub fn cancel_action(&mut self) {
        self.editing = None;
        self.delete_candidate = None;
        self.busy = false;
        self.action_error = None;
    }

    pub fn begin_action(&mut self) {
        self.busy = true;
        self.action_error = None;
    }

    /// Fold an edit/delete completion into state: close the open modal and
    /// request a single refetch on success, keep it open with an inline error
    /// on failure. Returns whether to refetch.
    pub fn finish_action(&mut self, result: Result<(), ApiError>) -> bool {
        self.busy = false;
        match result {
            Ok(()) => {
                self.editing = None;
                self.delete_candidate = None;
                self.action_error = None;
                true
            }
            Err(error) => {
                self.action_error = Some(error.to_string());
                false
            }
        }
    }
}
