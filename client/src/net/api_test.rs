use super::*;

#[test]
fn escrow_path_keeps_trailing_slash() {
    assert_eq!(escrow_path("42"), "/escrows/42/");
}

#[test]
fn escrow_invite_path_formats_expected_path() {
    assert_eq!(escrow_invite_path("42"), "/escrows/42/invite/");
}

#[test]
fn auth_paths_have_no_trailing_slash() {
    assert_eq!(LOGIN_PATH, "/auth/login");
    assert_eq!(REGISTER_PATH, "/auth/register");
    assert_eq!(LOGOUT_PATH, "/auth/logout");
    assert_eq!(BECOME_BROKER_PATH, "/auth/become-broker");
}

#[test]
fn collection_paths_keep_trailing_slash() {
    assert_eq!(ESCROWS_PATH, "/escrows/");
    assert_eq!(KYC_ME_PATH, "/kyc/me/");
}
