//! Top navigation bar.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::session_notice::MissingSessionNotice;
use crate::state::auth::AuthState;
use crate::state::session::use_auth;
use crate::util::guard::LOGIN_PATH;

/// Show the upgrade link only to signed-in users who are not brokers yet.
pub fn show_become_broker(state: &AuthState) -> bool {
    state.user().is_some_and(|u| !u.is_broker)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        // Build the client first so the notification still carries the token.
        let api = auth.api();
        leptos::task::spawn_local(async move {
            auth.logout(&api).await;
        });
        navigate(LOGIN_PATH, NavigateOptions::default());
    });

    let signed_in = move || auth.state().read().session.is_some();

    view! {
        <nav class="nav-bar">
            <A href="/dashboard" attr:class="nav-bar__brand">
                "Escrow Platform"
            </A>
            <div class="nav-bar__links">
                <Show when=move || show_become_broker(&auth.state().read())>
                    <A href="/become-broker" attr:class="btn nav-bar__upgrade">
                        "Become a broker"
                    </A>
                </Show>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="nav-bar__link">
                                "Login"
                            </A>
                            <A href="/register" attr:class="nav-bar__link">
                                "Register"
                            </A>
                        }
                    }
                >
                    <A href="/kyc" attr:class="nav-bar__link">
                        "KYC"
                    </A>
                    <button class="btn nav-bar__logout" type="button" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
    .into_any()
}
