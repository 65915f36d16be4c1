//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render tables, forms, and dialogs while pages own the state
//! signals and the calls into the net layer.

pub mod confirm_modal;
pub mod loading_state;
pub mod page_header;
pub mod status_badge;
pub mod task_form;
pub mod user_form;
