//! Inline loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingState(#[prop(default = String::from("Loading..."))] message: String) -> impl IntoView {
    view! { <p class="loading-state">{message}</p> }
}
