//! Users page: member list with edit and delete flows.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::loading_state::LoadingState;
use crate::components::page_header::PageHeader;
use crate::components::user_form::UserForm;
use crate::net;
use crate::state::session::SessionState;
use crate::state::users::UsersState;
use crate::util::guard;

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(session, || "/users".to_owned(), navigate);

    let users = RwSignal::new(UsersState::default());

    let fetch = move || {
        let mut epoch = 0;
        users.update(|s| epoch = s.begin_fetch());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = net::users::get_users().await;
            users.update(|s| {
                s.apply_fetch(epoch, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = epoch;
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        fetch();
    });

    let on_edit_saved = Callback::new(move |()| {
        users.update(UsersState::cancel_action);
        fetch();
    });
    let on_cancel = Callback::new(move |()| users.update(UsersState::cancel_action));

    let on_delete_confirm = Callback::new(move |()| {
        let Some(candidate) = users.get_untracked().delete_candidate else {
            return;
        };
        users.update(UsersState::begin_action);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = net::users::delete_user(&candidate.id).await;
            let mut refetch = false;
            users.update(|s| refetch = s.finish_action(result));
            if refetch {
                fetch();
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = candidate;
    });

    view! {
        <div class="page users-page">
            <PageHeader title="Team".to_owned()/>

            <Show when=move || users.get().error.is_some()>
                <p class="page__error">{move || users.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !users.get().loading
                fallback=|| view! { <LoadingState message="Loading members...".to_owned()/> }
            >
                <Show
                    when=move || !users.get().items.is_empty()
                    fallback=|| view! { <p class="page__empty">"No members yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                users
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|user| {
                                        let edit_target = user.clone();
                                        let delete_target = user.clone();
                                        view! {
                                            <tr>
                                                <td>{user.name.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>{user.role.as_str()}</td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| {
                                                            users.update(|s| s.open_edit(edit_target.clone()))
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| {
                                                            users.update(|s| s.request_delete(delete_target.clone()))
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

            {move || {
                users
                    .get()
                    .editing
                    .map(|user| {
                        view! {
                            <div class="dialog-backdrop">
                                <div class="dialog">
                                    <h2>"Edit Member"</h2>
                                    <UserForm existing=user on_saved=on_edit_saved on_cancel=on_cancel/>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                users
                    .get()
                    .delete_candidate
                    .map(|user| {
                        view! {
                            <ConfirmModal
                                title="Remove member".to_owned()
                                message=format!(
                                    "Are you sure you want to remove {}? Their tasks become unassigned.",
                                    user.name,
                                )
                                busy=Signal::derive(move || users.get().busy)
                                error=Signal::derive(move || users.get().action_error)
                                on_confirm=on_delete_confirm
                                on_cancel=on_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}
