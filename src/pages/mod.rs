//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guarding, fetching, modal
//! wiring) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod register;
pub mod task_details;
pub mod tasks;
pub mod users;
