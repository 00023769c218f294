use super::*;

#[test]
fn no_message_when_nothing_is_missing() {
    assert_eq!(missing_fields_message(&[]), None);
}

#[test]
fn message_lists_missing_labels_in_order() {
    let message = missing_fields_message(&[KycField::FullName, KycField::TaxId]).unwrap();
    assert_eq!(message, format!("Please complete: {}, {}.", KycField::FullName.label(), KycField::TaxId.label()));
}
