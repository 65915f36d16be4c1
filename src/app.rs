//! Application shell: session context, routes, and the startup hydration.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::task_details::TaskDetailsPage;
use crate::pages::tasks::TasksPage;
use crate::pages::users::UsersPage;
use crate::state::session::{self, SessionState};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session context shared by every page. Starts in the loading state and
    // settles exactly once from durable storage.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    Effect::new(move || {
        if session.get_untracked().loading {
            session.set(session::hydrate());
        }
    });

    view! {
        <Title text="TaskHub"/>
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="page__empty">"Page not found."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/tasks") view=TasksPage/>
                    <Route path=path!("/tasks/:id") view=TaskDetailsPage/>
                    <Route path=path!("/users") view=UsersPage/>
                </Routes>
            </main>
        </Router>
    }
}
