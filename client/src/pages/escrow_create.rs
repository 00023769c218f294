//! Broker-only page for drafting a new escrow transaction.

#[cfg(test)]
#[path = "escrow_create_test.rs"]
mod escrow_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::session_notice::MissingSessionNotice;
use crate::net::api::create_escrow;
use crate::net::types::{Currency, PropertyType, TransactionType};
use crate::state::session::use_auth;
use crate::util::escrow_form::EscrowForm;

const CREATE_FAILED: &str = "Unable to create the transaction. Try again.";

/// Where the broker goes after creating escrow `id`.
pub fn invite_path(id: &str) -> String {
    format!("/escrows/{id}/invite")
}

#[component]
pub fn EscrowCreatePage() -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };
    let navigate = use_navigate();

    let form = RwSignal::new(EscrowForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let escrow = match form.with_untracked(EscrowForm::validate) {
            Ok(escrow) => escrow,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = auth.api();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match create_escrow(&api, &escrow).await {
                Ok(created) => {
                    log::info!("created escrow {}", created.id);
                    navigate(&invite_path(&created.id), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("escrow create failed: {e}");
                    info.set(CREATE_FAILED.to_owned());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h1>"New transaction"</h1>
            <form class="form-card" on:submit=on_submit>
                <label class="form-field">
                    "Agreement name"
                    <input
                        type="text"
                        prop:value=move || form.read().agreement_name.clone()
                        on:input=move |ev| form.update(|f| f.agreement_name = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Currency"
                    <select
                        prop:value=move || form.read().currency.as_str()
                        on:change=move |ev| {
                            if let Some(currency) = Currency::from_wire(&event_target_value(&ev)) {
                                form.update(|f| f.currency = currency);
                            }
                        }
                    >
                        {Currency::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    "Transaction type"
                    <select
                        prop:value=move || form.read().transaction_type.as_str()
                        on:change=move |ev| {
                            if let Some(kind) = TransactionType::from_wire(&event_target_value(&ev)) {
                                form.update(|f| f.transaction_type = kind);
                            }
                        }
                    >
                        {TransactionType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    "Property type"
                    <select
                        prop:value=move || form.read().property_type.as_str()
                        on:change=move |ev| {
                            if let Some(kind) = PropertyType::from_wire(&event_target_value(&ev)) {
                                form.update(|f| f.property_type = kind);
                            }
                        }
                    >
                        {PropertyType::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    "Property value"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || form.read().property_value.clone()
                        on:input=move |ev| form.update(|f| f.property_value = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Estimated closing date"
                    <input
                        type="date"
                        prop:value=move || form.read().estimated_closing_date.clone()
                        on:input=move |ev| form.update(|f| f.estimated_closing_date = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Property address"
                    <textarea
                        rows="3"
                        prop:value=move || form.read().property_address.clone()
                        on:input=move |ev| form.update(|f| f.property_address = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-error">{move || info.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create transaction" }}
                </button>
            </form>
        </div>
    }
    .into_any()
}

