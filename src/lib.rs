//! TaskHub client: a browser front end for the TaskHub task-management API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is a REST API (`/auth`, `/tasks`, `/users`) fronted by JWT
//! bearer auth. This crate renders the SPA, keeps the session in
//! `localStorage`, and talks to the API through `net`.
//!
//! Everything that touches the browser lives behind the `hydrate` feature so
//! the pure logic in `net`, `state`, and `util` compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
