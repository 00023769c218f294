//! Broker-only page for inviting the buyer, seller, and co-broker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the escrow for context, then validates the invitation with
//! [`InviteForm::validate`] before anything is sent.

#[cfg(test)]
#[path = "escrow_invite_test.rs"]
mod escrow_invite_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::session_notice::MissingSessionNotice;
use crate::net::api::{fetch_escrow, invite_participants};
use crate::net::types::{EscrowParticipant, EscrowTransaction};
use crate::state::session::use_auth;
use crate::util::display::{format_money, role_label, status_label, transaction_type_label};
use crate::util::guard::DASHBOARD_PATH;
use crate::util::invite_form::{InviteForm, parse_share};

const LOAD_FAILED: &str = "Unable to load the transaction details.";
const INVITE_FAILED: &str = "Unable to send the invitations. Try again.";

/// One line per participant, e.g. `a@b.com (buyer, pending)`.
pub fn participant_line(participant: &EscrowParticipant) -> String {
    let state = if participant.has_accepted { "accepted" } else { "pending" };
    format!("{} ({}, {state})", participant.email, role_label(participant.role))
}

#[component]
fn EscrowDetails(escrow: EscrowTransaction) -> impl IntoView {
    let closing = escrow.estimated_closing_date.clone().unwrap_or_else(|| "Not set".to_owned());
    view! {
        <section class="form-card escrow-details">
            <h2>{escrow.agreement_name.clone()}</h2>
            <p class="page-hint">{escrow.property_address.clone()}</p>
            <dl class="escrow-details__facts">
                <dt>"Status"</dt>
                <dd>{status_label(escrow.status)}</dd>
                <dt>"Type"</dt>
                <dd>{transaction_type_label(&escrow.transaction_type)}</dd>
                <dt>"Value"</dt>
                <dd>{format_money(&escrow.currency, escrow.property_value)}</dd>
                <dt>"Estimated closing"</dt>
                <dd>{closing}</dd>
            </dl>
            <ul class="escrow-details__participants">
                {escrow.participants.iter().map(|p| view! { <li>{participant_line(p)}</li> }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn EscrowInvitePage() -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };
    let navigate = use_navigate();
    let escrow_id = use_params_map().with_untracked(|p| p.get("id")).unwrap_or_default();

    let escrow = RwSignal::new(None::<EscrowTransaction>);
    let load_error = RwSignal::new(None::<String>);
    let form = RwSignal::new(InviteForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    {
        let api = auth.api();
        let escrow_id = escrow_id.clone();
        leptos::task::spawn_local(async move {
            match fetch_escrow(&api, &escrow_id).await {
                Ok(found) => escrow.set(Some(found)),
                Err(e) => {
                    log::warn!("escrow {escrow_id} failed to load: {e}");
                    load_error.set(Some(LOAD_FAILED.to_owned()));
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(InviteForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = auth.api();
        let escrow_id = escrow_id.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match invite_participants(&api, &escrow_id, &payload).await {
                Ok(()) => {
                    log::info!("invitations sent for escrow {escrow_id}");
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("invite for escrow {escrow_id} failed: {e}");
                    info.set(INVITE_FAILED.to_owned());
                    busy.set(false);
                }
            }
        });
    };

    let details = move || {
        if let Some(message) = load_error.get() {
            return view! { <p class="page-error">{message}</p> }.into_any();
        }
        match escrow.get() {
            Some(found) => view! { <EscrowDetails escrow=found/> }.into_any(),
            None => view! { <p class="page-status">"Loading transaction..."</p> }.into_any(),
        }
    };

    view! {
        <div class="form-page">
            <h1>"Invite participants"</h1>
            {details}
            <form class="form-card" on:submit=on_submit>
                <label class="form-field">
                    "Co-broker email (optional)"
                    <input
                        type="email"
                        prop:value=move || form.read().co_broker_email.clone()
                        on:input=move |ev| form.update(|f| f.co_broker_email = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Buyer email"
                    <input
                        type="email"
                        prop:value=move || form.read().buyer_email.clone()
                        on:input=move |ev| form.update(|f| f.buyer_email = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Seller email"
                    <input
                        type="email"
                        prop:value=move || form.read().seller_email.clone()
                        on:input=move |ev| form.update(|f| f.seller_email = event_target_value(&ev))
                    />
                    <span class="page-hint">"Optional when a co-broker will invite the seller."</span>
                </label>
                <label class="form-field">
                    "Broker commission (%)"
                    <input
                        type="number"
                        min="0"
                        max="100"
                        step="0.01"
                        value="100"
                        on:input=move |ev| form.update(|f| f.broker_share = parse_share(&event_target_value(&ev)))
                    />
                </label>
                <label class="form-field">
                    "Co-broker commission (%)"
                    <input
                        type="number"
                        min="0"
                        max="100"
                        step="0.01"
                        value="0"
                        disabled=move || !form.read().has_co_broker()
                        on:input=move |ev| {
                            form.update(|f| f.co_broker_share = parse_share(&event_target_value(&ev)));
                        }
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-error">{move || info.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send invitations" }}
                </button>
            </form>
        </div>
    }
    .into_any()
}
