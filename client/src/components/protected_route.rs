//! Route wrapper that applies the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluated whenever the session signal changes, so signing out on a
//! protected page redirects immediately.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::session_notice::MissingSessionNotice;
use crate::state::session::use_auth;
use crate::util::guard::{DASHBOARD_PATH, GuardOutcome, RouteAccess, evaluate, login_redirect_path};

/// Render `children` only when the session satisfies `access`.
#[component]
pub fn ProtectedRoute(#[prop(optional)] access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let Ok(auth) = use_auth() else {
        return view! { <MissingSessionNotice/> }.into_any();
    };
    let location = use_location();

    (move || match evaluate(&auth.state().read(), access) {
        GuardOutcome::Allow => children().into_any(),
        GuardOutcome::RedirectToLogin => {
            let requested = location.pathname.get_untracked();
            view! { <Redirect path=login_redirect_path(&requested)/> }.into_any()
        }
        GuardOutcome::RedirectToDashboard => view! { <Redirect path=DASHBOARD_PATH/> }.into_any(),
    })
    .into_any()
}
