//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::session_notice::MissingSessionNotice;
use crate::net::types::LoginPayload;
use crate::state::session::use_auth;
use crate::util::guard::safe_next_path;

const LOGIN_FAILED: &str = "Unable to sign in. Check your credentials and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginFormError {
    #[error("Enter your email and password.")]
    MissingCredentials,
}

/// Trim the email and require both fields before anything is sent.
///
/// # Errors
///
/// Returns [`LoginFormError::MissingCredentials`] when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginPayload, LoginFormError> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(LoginFormError::MissingCredentials);
    }
    Ok(LoginPayload { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(payload) => payload,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        let target = query.with_untracked(|q| safe_next_path(q.get("next").as_deref()));
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let api = auth.api();
            if auth.login(&api, &payload).await.is_ok() {
                navigate(&target, NavigateOptions::default());
            } else {
                info.set(LOGIN_FAILED.to_owned());
                busy.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
    .into_any()
}
