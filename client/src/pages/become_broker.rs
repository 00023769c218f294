//! Page where a signed-in user requests broker privileges.

#[cfg(test)]
#[path = "become_broker_test.rs"]
mod become_broker_test;

use leptos::prelude::*;

use crate::components::session_notice::MissingSessionNotice;
use crate::net::error::ApiError;
use crate::state::session::use_auth;

const REQUEST_SENT: &str = "Request sent! Your account has been updated.";

/// User-facing text for a failed upgrade request.
pub fn become_broker_error_message(error: &ApiError) -> &'static str {
    match error.status() {
        Some(400) => "You already have a pending broker request.",
        _ => "Unable to submit your request. Try again.",
    }
}

#[component]
pub fn BecomeBrokerPage() -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        let api = auth.api();
        leptos::task::spawn_local(async move {
            match auth.become_broker(&api).await {
                Ok(response) => {
                    info.set(response.message.unwrap_or_else(|| REQUEST_SENT.to_owned()));
                }
                Err(e) => {
                    log::warn!("broker request failed: {e}");
                    info.set(become_broker_error_message(&e).to_owned());
                }
            }
            busy.set(false);
        });
    };

    let is_broker = move || auth.state().read().is_broker();

    view! {
        <div class="form-page">
            <h1>"Become a broker"</h1>
            <Show
                when=move || !is_broker()
                fallback=|| view! { <p class="page-status">"You are already a broker."</p> }
            >
                <form class="form-card" on:submit=on_submit>
                    <p>"Submit this form to request broker permissions."</p>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Request access" }}
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="page-status">{move || info.get()}</p>
            </Show>
        </div>
    }
    .into_any()
}
