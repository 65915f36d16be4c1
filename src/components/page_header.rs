//! Header bar shared by the authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::util::guard::LOGIN_PATH;

/// Page title, navigation links, the signed-in identity, and logout.
#[component]
pub fn PageHeader(title: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let identity = move || {
        session
            .get()
            .user
            .map(|user| (user.name, user.role.as_str()))
            .unwrap_or_else(|| (String::new(), ""))
    };

    let on_logout = move |_| {
        session.set(session::logout());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="page-header toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="toolbar__nav">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/tasks">"Tasks"</a>
                <a href="/users">"Team"</a>
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">
                {move || identity().0}
                " ("
                <span class="toolbar__self-role">{move || identity().1}</span>
                ")"
            </span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
