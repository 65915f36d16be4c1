//! Create/edit task form used inside the tasks-page modals.
//!
//! DESIGN
//! ======
//! Payload construction is split into pure builders because create and edit
//! treat an empty assignee selection differently: edit sends an explicit
//! `null` ("unassign"), create omits the field ("backend decides"). That
//! asymmetry is contract, not accident.

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

use leptos::prelude::*;

use crate::net;
use crate::net::tasks::{CreateTaskPayload, UpdateTaskPayload};
use crate::net::types::{Task, TaskStatus, User};

/// Trimmed title or a message for the inline error slot.
pub fn validate_task_input(title: &str) -> Result<String, &'static str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Title is required.");
    }
    Ok(trimmed.to_owned())
}

fn normalize_selection(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Create payload: an empty assignee selection is omitted entirely.
pub fn build_create_payload(
    title: &str,
    description: &str,
    status: TaskStatus,
    assigned: &str,
) -> CreateTaskPayload {
    CreateTaskPayload {
        title: title.trim().to_owned(),
        description: description.trim().to_owned(),
        status,
        assigned_to: normalize_selection(assigned),
    }
}

/// Update payload: an empty assignee selection becomes an explicit `null`.
pub fn build_update_payload(
    title: &str,
    description: &str,
    status: TaskStatus,
    assigned: &str,
) -> UpdateTaskPayload {
    UpdateTaskPayload {
        title: title.trim().to_owned(),
        description: description.trim().to_owned(),
        status,
        assigned_to: normalize_selection(assigned),
    }
}

/// Task form. With `existing` set it edits that task, otherwise it creates.
/// On success `on_saved` fires and the owning page closes the modal and
/// re-fetches; on failure the error renders inline and the modal stays open.
#[component]
pub fn TaskForm(
    #[prop(optional)] existing: Option<Task>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = existing.is_some();
    let target_id = existing.as_ref().map(|t| t.id.clone()).unwrap_or_default();
    let title = RwSignal::new(existing.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let description =
        RwSignal::new(existing.as_ref().map(|t| t.description.clone()).unwrap_or_default());
    let status = RwSignal::new(existing.as_ref().map_or(TaskStatus::Pending, |t| t.status));
    let assigned = RwSignal::new(existing.as_ref().map(Task::assignee_id).unwrap_or_default());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Member list for the assignee picker. Load failures degrade to an
    // id-only picker rather than blocking the form.
    let users = RwSignal::new(Vec::<User>::new());
    let users_loading = RwSignal::new(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match net::users::get_users().await {
            Ok(list) => users.set(list),
            Err(e) => log::warn!("could not load members for the assignee picker: {e}"),
        }
        users_loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    users_loading.set(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let title_value = match validate_task_input(&title.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        submitting.set(true);
        error.set(None);
        let description_value = description.get();
        let status_value = status.get();
        let assigned_value = assigned.get();
        let target_id = target_id.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if is_edit {
                let payload = build_update_payload(
                    &title_value,
                    &description_value,
                    status_value,
                    &assigned_value,
                );
                net::tasks::update_task(&target_id, &payload).await.map(|_| ())
            } else {
                let payload = build_create_payload(
                    &title_value,
                    &description_value,
                    status_value,
                    &assigned_value,
                );
                net::tasks::create_task(&payload).await.map(|_| ())
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title_value, description_value, status_value, assigned_value, target_id);
            submitting.set(false);
        }
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <label class="dialog__label">
                "Title"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="dialog__label">
                "Status"
                <select
                    class="dialog__input"
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| status.set(TaskStatus::parse(&event_target_value(&ev)))
                >
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="dialog__label">
                "Assigned to"
                <select
                    class="dialog__input"
                    prop:value=move || assigned.get()
                    on:change=move |ev| assigned.set(event_target_value(&ev))
                >
                    <option value="">"Not assigned"</option>
                    <Show when=move || users_loading.get()>
                        <option disabled>"Loading members..."</option>
                    </Show>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|u| view! { <option value=u.id.clone()>{u.name.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <Show when=move || error.get().is_some()>
                <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="dialog__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {if is_edit { "Save" } else { "Create" }}
                </button>
            </div>
        </form>
    }
}
