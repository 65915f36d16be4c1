//! Edit-member form used inside the users-page modal.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;

use crate::net;
use crate::net::users::UpdateUserPayload;
use crate::net::types::User;

/// Validate member fields the same way the backend's form rules do: a short
/// letters-and-spaces name and a plausible, bounded email.
pub fn validate_member_input(name: &str, email: &str) -> Result<UpdateUserPayload, &'static str> {
    let name = name.trim();
    if name.len() < 2 {
        return Err("Name must be at least 2 characters.");
    }
    if name.len() > 50 {
        return Err("Name must not exceed 50 characters.");
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err("Name can only contain letters and spaces.");
    }
    let email = email.trim();
    if email.len() > 100 {
        return Err("Email must not exceed 100 characters.");
    }
    let plausible = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !plausible {
        return Err("Invalid email format.");
    }
    Ok(UpdateUserPayload {
        name: name.to_owned(),
        email: email.to_owned(),
    })
}

/// Member edit form. On success `on_saved` fires and the owning page closes
/// the modal and re-fetches.
#[component]
pub fn UserForm(existing: User, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let target_id = existing.id.clone();
    let name = RwSignal::new(existing.name.clone());
    let email = RwSignal::new(existing.email.clone());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_member_input(&name.get(), &email.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        submitting.set(true);
        error.set(None);
        let target_id = target_id.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match net::users::update_user(&target_id, &payload).await {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, target_id);
            submitting.set(false);
        }
    };

    view! {
        <form class="user-form" on:submit=on_submit>
            <label class="dialog__label">
                "Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Email"
                <input
                    class="dialog__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="dialog__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    "Save"
                </button>
            </div>
        </form>
    }
}
