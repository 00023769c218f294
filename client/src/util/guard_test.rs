use super::*;
use crate::net::types::{AuthResponse, User};
use crate::state::storage::MemoryStorage;

fn signed_in(is_broker: bool) -> AuthState {
    let mut state = AuthState::default();
    let response = AuthResponse {
        token: "t1".to_owned(),
        user: User { id: "1".to_owned(), email: "a@b.com".to_owned(), is_broker },
    };
    state.apply_auth_response(response, &MemoryStorage::new());
    state
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn anonymous_is_sent_to_login() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state, RouteAccess::Authenticated), GuardOutcome::RedirectToLogin);
    assert_eq!(evaluate(&state, RouteAccess::Broker), GuardOutcome::RedirectToLogin);
}

#[test]
fn signed_in_user_may_view_authenticated_routes() {
    assert_eq!(evaluate(&signed_in(false), RouteAccess::Authenticated), GuardOutcome::Allow);
}

#[test]
fn non_broker_is_sent_to_dashboard_from_broker_routes() {
    assert_eq!(evaluate(&signed_in(false), RouteAccess::Broker), GuardOutcome::RedirectToDashboard);
}

#[test]
fn broker_may_view_broker_routes() {
    assert_eq!(evaluate(&signed_in(true), RouteAccess::Broker), GuardOutcome::Allow);
}

#[test]
fn authenticating_without_session_still_redirects() {
    let mut state = AuthState::default();
    state.begin_authenticating();
    assert_eq!(evaluate(&state, RouteAccess::Authenticated), GuardOutcome::RedirectToLogin);
}

// =============================================================
// login_redirect_path
// =============================================================

#[test]
fn redirect_path_encodes_requested_route() {
    assert_eq!(login_redirect_path("/escrows/7/invite"), "/login?next=%2Fescrows%2F7%2Finvite");
}

#[test]
fn redirect_path_skips_next_for_default_landing() {
    assert_eq!(login_redirect_path("/dashboard"), "/login");
    assert_eq!(login_redirect_path("/"), "/login");
    assert_eq!(login_redirect_path(""), "/login");
}

// =============================================================
// safe_next_path
// =============================================================

#[test]
fn safe_next_path_accepts_local_paths() {
    assert_eq!(safe_next_path(Some("/kyc")), "/kyc");
    assert_eq!(safe_next_path(Some("/escrows/7/invite")), "/escrows/7/invite");
}

#[test]
fn safe_next_path_defaults_to_dashboard() {
    assert_eq!(safe_next_path(None), "/dashboard");
    assert_eq!(safe_next_path(Some("")), "/dashboard");
}

#[test]
fn safe_next_path_rejects_external_targets() {
    assert_eq!(safe_next_path(Some("https://evil.test")), "/dashboard");
    assert_eq!(safe_next_path(Some("//evil.test")), "/dashboard");
    assert_eq!(safe_next_path(Some("/\\evil.test")), "/dashboard");
}

#[test]
fn safe_next_path_rejects_login_loop() {
    assert_eq!(safe_next_path(Some("/login?next=/kyc")), "/dashboard");
}
