//! Task details page: a single task with an assign picker and a delete action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use crate::components::loading_state::LoadingState;
use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::net;
use crate::net::error::ApiError;
use crate::net::types::{Task, User};
use crate::state::session::SessionState;
use crate::util::guard;

#[component]
pub fn TaskDetailsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let location = use_location();
    guard::install_route_guard(
        session,
        move || location.pathname.get(),
        navigate.clone(),
    );

    let params = use_params_map();
    let task = RwSignal::new(None::<Task>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let members = RwSignal::new(Vec::<User>::new());
    let selected = RwSignal::new(String::new());
    let assign_busy = RwSignal::new(false);
    let assign_error = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(id) = params.get().get("id") else {
            return;
        };
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match net::tasks::get_task(&id).await {
                Ok(loaded) => {
                    selected.set(loaded.assignee_id());
                    task.set(Some(loaded));
                }
                Err(ApiError::NotFound(_)) => error.set(Some("Task not found.".to_owned())),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match net::users::get_users().await {
                Ok(list) => members.set(list),
                Err(e) => log::warn!("could not load members for the assign picker: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    let on_assign = move |_| {
        if assign_busy.get() {
            return;
        }
        let Some(current) = task.get_untracked() else {
            return;
        };
        let user_id = selected.get_untracked();
        if user_id.is_empty() {
            assign_error.set(Some("Pick a member to assign.".to_owned()));
            return;
        }
        assign_busy.set(true);
        assign_error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match net::tasks::assign_task(&current.id, &user_id).await {
                Ok(updated) => {
                    selected.set(updated.assignee_id());
                    task.set(Some(updated));
                }
                Err(e) => assign_error.set(Some(e.to_string())),
            }
            assign_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, user_id);
            assign_busy.set(false);
        }
    };

    let delete_navigate = navigate.clone();
    let on_delete = Callback::new(move |()| {
        let Some(current) = task.get_untracked() else {
            return;
        };
        let navigate = delete_navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match net::tasks::delete_task(&current.id).await {
                Ok(()) => navigate("/tasks", NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, navigate);
    });

    view! {
        <div class="page task-details-page">
            <PageHeader title="Task".to_owned()/>
            <div class="page__toolbar">
                <a href="/tasks" class="btn">"Back to tasks"</a>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingState message="Loading task...".to_owned()/> }
            >
                {move || {
                    task.get()
                        .map(|current| {
                            view! {
                                <article class="task-details">
                                    <h1 class="task-details__title">{current.title.clone()}</h1>
                                    <StatusBadge status=current.status/>
                                    <p class="task-details__description">{current.description.clone()}</p>
                                    <dl class="task-details__meta">
                                        <dt>"Assigned to"</dt>
                                        <dd>{current.assignee_display()}</dd>
                                        <dt>"Created"</dt>
                                        <dd>{current.created_at.format("%Y-%m-%d %H:%M").to_string()}</dd>
                                        <dt>"Updated"</dt>
                                        <dd>{current.updated_at.format("%Y-%m-%d %H:%M").to_string()}</dd>
                                    </dl>

                                    <div class="task-details__assign">
                                        <select
                                            class="dialog__input"
                                            prop:value=move || selected.get()
                                            on:change=move |ev| selected.set(event_target_value(&ev))
                                        >
                                            <option value="">"Pick a member"</option>
                                            {move || {
                                                members
                                                    .get()
                                                    .into_iter()
                                                    .map(|u| {
                                                        view! { <option value=u.id.clone()>{u.name.clone()}</option> }
                                                    })
                                                    .collect::<Vec<_>>()
                                            }}
                                        </select>
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || assign_busy.get()
                                            on:click=on_assign
                                        >
                                            "Assign"
                                        </button>
                                    </div>
                                    <Show when=move || assign_error.get().is_some()>
                                        <p class="dialog__error">
                                            {move || assign_error.get().unwrap_or_default()}
                                        </p>
                                    </Show>

                                    <div class="task-details__danger">
                                        <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                                            "Delete task"
                                        </button>
                                    </div>
                                </article>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
