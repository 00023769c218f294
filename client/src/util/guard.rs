//! Route access predicate shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` evaluates this on each navigation; the login page uses
//! [`safe_next_path`] to return the user where the guard intercepted them.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

/// Landing route for signed-in users.
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";

/// What a route demands of the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteAccess {
    /// Any signed-in user.
    #[default]
    Authenticated,
    /// Signed-in users with broker privileges.
    Broker,
}

/// Verdict for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decide whether `state` may view a route requiring `access`.
pub fn evaluate(state: &AuthState, access: RouteAccess) -> GuardOutcome {
    if state.token().is_none() {
        return GuardOutcome::RedirectToLogin;
    }
    if access == RouteAccess::Broker && !state.is_broker() {
        return GuardOutcome::RedirectToDashboard;
    }
    GuardOutcome::Allow
}

/// Login URL that returns to `requested` after signing in.
pub fn login_redirect_path(requested: &str) -> String {
    if requested.is_empty() || requested == "/" || requested == DASHBOARD_PATH {
        return LOGIN_PATH.to_owned();
    }
    let encoded: String = url::form_urlencoded::byte_serialize(requested.as_bytes()).collect();
    format!("{LOGIN_PATH}?next={encoded}")
}

/// Post-login destination: `next` if it is a same-origin path, else the dashboard.
pub fn safe_next_path(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.starts_with(LOGIN_PATH) =>
        {
            path.to_owned()
        }
        _ => DASHBOARD_PATH.to_owned(),
    }
}
