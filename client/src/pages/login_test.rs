use super::*;

#[test]
fn validate_login_input_trims_email() {
    let payload = validate_login_input("  user@example.com  ", "secret").unwrap();
    assert_eq!(payload.email, "user@example.com");
    assert_eq!(payload.password, "secret");
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let payload = validate_login_input("a@b.com", " pass word ").unwrap();
    assert_eq!(payload.password, " pass word ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(LoginFormError::MissingCredentials));
    assert_eq!(validate_login_input("a@b.com", ""), Err(LoginFormError::MissingCredentials));
    assert_eq!(validate_login_input("a@b.com", "   "), Err(LoginFormError::MissingCredentials));
}

#[test]
fn missing_credentials_message_is_user_facing() {
    assert_eq!(LoginFormError::MissingCredentials.to_string(), "Enter your email and password.");
}
