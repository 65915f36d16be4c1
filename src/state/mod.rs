//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! State structs are plain data with small transition methods; pages own the
//! `RwSignal` wrappers. Keeping transitions on the structs makes flows like
//! fetch-epoch staleness and mutate-then-refetch testable without a browser.

pub mod dashboard;
pub mod session;
pub mod tasks;
pub mod users;
