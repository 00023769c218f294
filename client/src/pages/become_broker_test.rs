use super::*;

#[test]
fn bad_request_means_pending_request() {
    assert_eq!(become_broker_error_message(&ApiError::Status(400)), "You already have a pending broker request.");
}

#[test]
fn other_failures_get_generic_message() {
    let generic = "Unable to submit your request. Try again.";
    assert_eq!(become_broker_error_message(&ApiError::Status(500)), generic);
    assert_eq!(become_broker_error_message(&ApiError::Network("offline".to_owned())), generic);
    assert_eq!(become_broker_error_message(&ApiError::Unavailable), generic);
}
