//! Login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net;
use crate::state::session::SessionState;
use crate::util::guard::{self, LOGIN_PATH};

/// Trimmed credentials, or a message for the inline error slot.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login form. Accepts a `from` query parameter carrying the path the visitor
/// originally asked for, and a `registered` flag set by the register page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Already signed-in visitors bounce straight to the dashboard.
    guard::install_route_guard(session, || LOGIN_PATH.to_owned(), navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let just_registered = move || query.get().get("registered").is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        submitting.set(true);
        error.set(None);
        let navigate = navigate.clone();
        let return_to = query.get_untracked().get("from");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match net::auth::login(&email_value, &password_value).await {
                Ok((token, user)) => {
                    session.set(SessionState::authenticated(user, token));
                    navigate(
                        &guard::post_login_target(return_to.as_deref()),
                        NavigateOptions::default(),
                    );
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, navigate, return_to);
            submitting.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign in"</h1>
                <Show when=just_registered>
                    <p class="auth-card__notice">"Account created. Sign in to continue."</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
