//! Dashboard page listing the user's escrows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. The escrow list is fetched once on mount;
//! brokers also get the create and invite entry points.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::escrow_card::EscrowCard;
use crate::components::session_notice::MissingSessionNotice;
use crate::net::api::list_escrows;
use crate::net::types::{EscrowRole, EscrowSummary};
use crate::state::auth::AuthState;
use crate::state::session::use_auth;

const LOAD_FAILED: &str = "Unable to load escrows right now.";

/// Welcome line for the signed-in user.
pub fn greeting(state: &AuthState) -> String {
    let who = state.user().map_or("user", |u| u.email.as_str());
    format!("Welcome back, {who}.")
}

/// Only the escrow's broker may invite participants.
pub fn can_invite(escrow: &EscrowSummary) -> bool {
    escrow.role == EscrowRole::Broker
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };
    let escrows = RwSignal::new(None::<Vec<EscrowSummary>>);
    let error = RwSignal::new(None::<String>);

    let api = auth.api();
    leptos::task::spawn_local(async move {
        match list_escrows(&api).await {
            Ok(list) => {
                log::debug!("loaded {} escrows", list.len());
                escrows.set(Some(list));
            }
            Err(e) => {
                log::warn!("escrow list failed: {e}");
                error.set(Some(LOAD_FAILED.to_owned()));
            }
        }
    });

    let is_broker = move || auth.state().read().is_broker();

    let escrow_list = move || {
        if let Some(message) = error.get() {
            return view! { <p class="page-error">{message}</p> }.into_any();
        }
        match escrows.get() {
            None => view! { <p class="page-status">"Loading escrows..."</p> }.into_any(),
            Some(list) if list.is_empty() => {
                view! { <p class="page-status">"You are not part of any escrows yet."</p> }.into_any()
            }
            Some(list) => view! {
                <div class="escrow-list">
                    {list
                        .into_iter()
                        .map(|escrow| {
                            let invite = can_invite(&escrow);
                            view! { <EscrowCard escrow=escrow can_invite=invite/> }
                        })
                        .collect_view()}
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="dashboard-page__greeting">{move || greeting(&auth.state().read())}</p>
                </div>
                <Show when=is_broker>
                    <A href="/escrows/new" attr:class="btn btn--primary">
                        "Create transaction"
                    </A>
                </Show>
            </header>
            <section class="dashboard-page__escrows">
                <div class="dashboard-page__section-header">
                    <h2>"Your escrows"</h2>
                    <Show when=move || !is_broker()>
                        <span class="page-hint">"Contact your broker to create new transactions."</span>
                    </Show>
                </div>
                {escrow_list}
            </section>
        </div>
    }
    .into_any()
}
