//! Dashboard page: aggregate statistics cards.
//!
//! The aggregated endpoint is preferred but optional; when it is missing or
//! unusable the same cards are computed from the raw task list. See
//! `state::dashboard` for the degradation rules.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_state::LoadingState;
use crate::components::page_header::PageHeader;
use crate::net;
use crate::state::dashboard::{DashboardState, TaskStats, tasks_from_dashboard};
use crate::state::session::SessionState;
use crate::util::guard::{self, DASHBOARD_PATH};

/// Card labels and values in render order.
pub fn stats_cards(stats: &TaskStats) -> Vec<(&'static str, String)> {
    vec![
        ("Total Tasks", stats.total.to_string()),
        ("Completed", stats.completed.to_string()),
        ("In Progress", stats.in_progress.to_string()),
        ("Pending", stats.pending.to_string()),
        ("Active Users", stats.active_users.to_string()),
        ("Completion Rate", format!("{}%", stats.completion_rate)),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(session, || DASHBOARD_PATH.to_owned(), navigate);

    let dashboard = RwSignal::new(DashboardState::default());

    let fetch = move || {
        let mut epoch = 0;
        dashboard.update(|s| epoch = s.begin_fetch());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (aggregated, tasks) = match net::tasks::get_dashboard().await {
                Ok(value) => {
                    let aggregated = TaskStats::from_dashboard_value(&value);
                    match tasks_from_dashboard(&value) {
                        Some(tasks) => (aggregated, Ok(tasks)),
                        None => {
                            (aggregated, net::tasks::get_tasks().await.map_err(|e| e.to_string()))
                        }
                    }
                }
                Err(_) => (None, net::tasks::get_tasks().await.map_err(|e| e.to_string())),
            };
            dashboard.update(|s| {
                s.apply_fetch(epoch, aggregated, tasks);
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

    view! {
        <div class="page dashboard-page">
            <PageHeader title="Dashboard".to_owned()/>

            <Show when=move || dashboard.get().error.is_some()>
                <p class="page__error">{move || dashboard.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !dashboard.get().loading
                fallback=|| view! { <LoadingState message="Loading dashboard...".to_owned()/> }
            >
                <div class="stats-grid">
                    {move || {
                        stats_cards(&dashboard.get().stats())
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="stats-card">
                                        <span class="stats-card__value">{value}</span>
                                        <span class="stats-card__label">{label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
