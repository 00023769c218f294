//! KYC page: load, edit, and save the caller's identity record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record's role decides which extra fields appear (see
//! [`crate::util::kyc_form`]). Inputs are rebuilt only when the role
//! changes, never on keystrokes.

#[cfg(test)]
#[path = "kyc_test.rs"]
mod kyc_test;

use leptos::prelude::*;

use crate::components::session_notice::MissingSessionNotice;
use crate::net::api::{fetch_kyc, save_kyc};
use crate::net::types::KycForm;
use crate::state::session::use_auth;
use crate::util::kyc_form::{KycField, field_value, missing_fields, set_field_value, visible_fields};

const LOAD_FAILED: &str = "Unable to load your KYC information.";
const SAVE_FAILED: &str = "Unable to save your information. Try again.";
const SAVED: &str = "Information saved.";

/// Inline error listing the blank required fields, if any.
pub fn missing_fields_message(missing: &[KycField]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    Some(format!("Please complete: {}.", labels.join(", ")))
}

fn field_input(form: RwSignal<Option<KycForm>>, field: KycField) -> AnyView {
    let value = move || form.with(|state| state.as_ref().map(|kyc| field_value(kyc, field).to_owned()).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        form.update(|state| {
            if let Some(kyc) = state.as_mut() {
                set_field_value(kyc, field, raw);
            }
        });
    };

    if field.multiline() {
        view! {
            <label class="form-field">
                {field.label()}
                <textarea name=field.name() rows="3" prop:value=value on:input=on_input></textarea>
            </label>
        }
        .into_any()
    } else {
        view! {
            <label class="form-field">
                {field.label()}
                <input type=field.input_type() name=field.name() prop:value=value on:input=on_input/>
            </label>
        }
        .into_any()
    }
}

#[component]
pub fn KycPage() -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };

    let form = RwSignal::new(None::<KycForm>);
    let load_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let api = auth.api();
    leptos::task::spawn_local(async move {
        match fetch_kyc(&api).await {
            Ok(kyc) => form.set(Some(kyc)),
            Err(e) => {
                log::warn!("kyc load failed: {e}");
                load_error.set(Some(LOAD_FAILED.to_owned()));
            }
        }
    });

    let role = Memo::new(move |_| form.with(|state| state.as_ref().map(|kyc| kyc.role)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(kyc) = form.get_untracked() else {
            return;
        };
        success.set(None);
        if let Some(message) = missing_fields_message(&missing_fields(&kyc)) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        busy.set(true);

        let api = auth.api();
        leptos::task::spawn_local(async move {
            match save_kyc(&api, &kyc).await {
                Ok(()) => success.set(Some(SAVED.to_owned())),
                Err(e) => {
                    log::warn!("kyc save failed: {e}");
                    error.set(Some(SAVE_FAILED.to_owned()));
                }
            }
            busy.set(false);
        });
    };

    let body = move || {
        if let Some(message) = load_error.get() {
            return view! { <p class="page-error">{message}</p> }.into_any();
        }
        let Some(role) = role.get() else {
            return view! { <p class="page-status">"Loading KYC information..."</p> }.into_any();
        };
        view! {
            <form class="form-card kyc-form" on:submit=on_submit>
                <div class="kyc-form__grid">
                    {visible_fields(role).into_iter().map(|field| field_input(form, field)).collect_view()}
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="form-success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        }
        .into_any()
    };

    view! {
        <div class="form-page">
            <h1>"Identity verification"</h1>
            <p class="page-hint">"Complete your information to take part in escrow transactions."</p>
            {body}
        </div>
    }
    .into_any()
}
