//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single gateway every request goes through, `auth`/`tasks`/
//! `users` are the typed resource clients, and `types` defines wire decoding
//! and normalization.

pub mod auth;
pub mod error;
pub mod http;
pub mod tasks;
pub mod types;
pub mod users;
