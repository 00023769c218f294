//! Registration page: creates an account and signs straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::session_notice::MissingSessionNotice;
use crate::net::types::RegisterPayload;
use crate::state::session::use_auth;
use crate::util::guard::DASHBOARD_PATH;

const REGISTER_FAILED: &str = "Unable to create your account. Try a different email.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterFormError {
    #[error("Email and password are required.")]
    MissingCredentials,
}

/// Build the request body; a blank name is left out.
///
/// # Errors
///
/// Returns [`RegisterFormError::MissingCredentials`] when email or password is blank.
pub fn validate_register_input(name: &str, email: &str, password: &str) -> Result<RegisterPayload, RegisterFormError> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(RegisterFormError::MissingCredentials);
    }
    let name = name.trim();
    Ok(RegisterPayload {
        email: email.to_owned(),
        password: password.to_owned(),
        name: (!name.is_empty()).then(|| name.to_owned()),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload =
            match validate_register_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
                Ok(payload) => payload,
                Err(e) => {
                    info.set(e.to_string());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let api = auth.api();
            if auth.register(&api, &payload).await.is_ok() {
                navigate(DASHBOARD_PATH, NavigateOptions::default());
            } else {
                info.set(REGISTER_FAILED.to_owned());
                busy.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        "Name"
                        <input
                            class="auth-input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
    .into_any()
}
