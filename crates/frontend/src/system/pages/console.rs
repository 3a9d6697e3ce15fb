//! Generic console page: fetch the route's endpoint and show it as a table

use contracts::shared::envelope::{Envelope, Paging};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use serde_json::Value;

use crate::layout::Shell;
use crate::routes::table::{find_route, ConsoleRoute};
use crate::shared::api_utils::fetch_envelope;
use crate::shared::table_utils::tabulate;
use crate::system::auth::context::use_auth;
use crate::system::auth::error::AuthError;
use crate::system::auth::guard::RoleRedirect;

#[derive(Clone, Debug)]
enum LoadState {
    Loading,
    Loaded(Envelope<Value>),
    Failed(String),
}

fn paging_summary(paging: &Paging) -> Option<String> {
    let page = paging.page?;
    let total_page = paging.total_page.unwrap_or(page);
    Some(match paging.total_item {
        Some(total) => format!("Halaman {} dari {} · {} data", page, total_page, total),
        None => format!("Halaman {} dari {}", page, total_page),
    })
}

/// Page for whatever console route the URL points at
#[component]
pub fn ConsolePage() -> impl IntoView {
    let location = use_location();

    move || match find_route(&location.pathname.get()) {
        Some(route) => view! {
            <Shell area=route.area>
                <ResourceView route=*route />
            </Shell>
        }
        .into_any(),
        None => view! { <RoleRedirect /> }.into_any(),
    }
}

#[component]
fn ResourceView(route: ConsoleRoute) -> impl IntoView {
    let (state, set_state) = signal(LoadState::Loading);

    match use_auth().store().get().token {
        Some(token) => {
            spawn_local(async move {
                let next = match fetch_envelope::<Value>(route.endpoint, &token).await {
                    Ok(envelope) => LoadState::Loaded(envelope),
                    Err(e) => {
                        log::error!("{} failed: {}", route.endpoint, e);
                        LoadState::Failed(e.user_message())
                    }
                };
                set_state.set(next);
            });
        }
        None => set_state.set(LoadState::Failed(
            AuthError::Unexpected("no session token".to_string()).user_message(),
        )),
    }

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{route.title}</h1>
            </div>
            {move || match state.get() {
                LoadState::Loading => view! { <div class="loading-placeholder">"Memuat..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error-message">{message}</div> }.into_any(),
                LoadState::Loaded(envelope) => {
                    let data = envelope.data.unwrap_or(Value::Null);
                    let (columns, rows) = tabulate(&data);
                    let summary = envelope.paging.as_ref().and_then(paging_summary);
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    {columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                        {summary.map(|s| view! { <div class="paging-summary">{s}</div> })}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
