//! Tasks page: list, create/edit modals, delete confirmation.
//!
//! DESIGN
//! ======
//! Mutations never edit the list in place. Every successful create, edit, or
//! delete closes its modal and triggers exactly one re-fetch, so the rendered
//! list always reflects what the backend persisted.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::loading_state::LoadingState;
use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::components::task_form::TaskForm;
use crate::net;
use crate::state::session::SessionState;
use crate::state::tasks::TasksState;
use crate::util::guard;

#[component]
pub fn TasksPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(session, || "/tasks".to_owned(), navigate);

    let tasks = RwSignal::new(TasksState::default());

    let fetch = move || {
        let mut epoch = 0;
        tasks.update(|s| epoch = s.begin_fetch());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = net::tasks::get_tasks().await;
            tasks.update(|s| {
                s.apply_fetch(epoch, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = epoch;
    };

    // Fetch once on mount.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        fetch();
    });

    let on_create_saved = Callback::new(move |()| {
        tasks.update(|s| s.show_create = false);
        fetch();
    });
    let on_create_cancel = Callback::new(move |()| tasks.update(|s| s.show_create = false));
    let on_edit_saved = Callback::new(move |()| {
        tasks.update(|s| s.editing = None);
        fetch();
    });
    let on_edit_cancel = Callback::new(move |()| tasks.update(|s| s.editing = None));

    let on_delete_cancel = Callback::new(move |()| tasks.update(TasksState::cancel_delete));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(candidate) = tasks.get_untracked().delete_candidate else {
            return;
        };
        tasks.update(TasksState::begin_delete);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = net::tasks::delete_task(&candidate.id).await;
            let mut refetch = false;
            tasks.update(|s| refetch = s.finish_delete(result));
            if refetch {
                fetch();
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = candidate;
    });

    view! {
        <div class="page tasks-page">
            <PageHeader title="Tasks".to_owned()/>
            <div class="page__toolbar">
                <button
                    class="btn btn--primary"
                    on:click=move |_| tasks.update(|s| s.show_create = true)
                >
                    "Add Task"
                </button>
            </div>

            <Show when=move || tasks.get().error.is_some()>
                <p class="page__error">{move || tasks.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !tasks.get().loading
                fallback=|| view! { <LoadingState message="Loading tasks...".to_owned()/> }
            >
                <Show
                    when=move || !tasks.get().items.is_empty()
                    fallback=|| view! { <p class="page__empty">"No tasks yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Description"</th>
                                <th>"Status"</th>
                                <th>"Assigned to"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                tasks
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|task| {
                                        let edit_target = task.clone();
                                        let delete_target = task.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=format!("/tasks/{}", task.id)>{task.title.clone()}</a>
                                                </td>
                                                <td>{task.description.clone()}</td>
                                                <td>
                                                    <StatusBadge status=task.status/>
                                                </td>
                                                <td>{task.assignee_display()}</td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| {
                                                            tasks
                                                                .update(|s| {
                                                                    s.editing = Some(edit_target.clone());
                                                                })
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| {
                                                            tasks.update(|s| s.request_delete(delete_target.clone()))
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || tasks.get().show_create>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h2>"Add Task"</h2>
                        <TaskForm on_saved=on_create_saved on_cancel=on_create_cancel/>
                    </div>
                </div>
            </Show>

            {move || {
                tasks
                    .get()
                    .editing
                    .map(|task| {
                        view! {
                            <div class="dialog-backdrop">
                                <div class="dialog">
                                    <h2>"Edit Task"</h2>
                                    <TaskForm existing=task on_saved=on_edit_saved on_cancel=on_edit_cancel/>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                tasks
                    .get()
                    .delete_candidate
                    .map(|task| {
                        view! {
                            <ConfirmModal
                                title="Delete task".to_owned()
                                message=format!(
                                    "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                                    task.title,
                                )
                                busy=Signal::derive(move || tasks.get().delete_busy)
                                error=Signal::derive(move || tasks.get().delete_error)
                                on_confirm=on_delete_confirm
                                on_cancel=on_delete_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}
