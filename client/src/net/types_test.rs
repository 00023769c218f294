use super::*;

// =============================================================
// User decoding
// =============================================================

#[test]
fn user_accepts_string_id() {
    let user: User = serde_json::from_str(r#"{"id":"1","email":"a@b.com","is_broker":false}"#).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "a@b.com");
    assert!(!user.is_broker);
}

#[test]
fn user_accepts_integer_id() {
    let user: User = serde_json::from_str(r#"{"id":42,"email":"b@c.com","is_broker":true}"#).unwrap();
    assert_eq!(user.id, "42");
    assert!(user.is_broker);
}

#[test]
fn user_missing_is_broker_defaults_false() {
    let user: User = serde_json::from_str(r#"{"id":"7","email":"x@y.com"}"#).unwrap();
    assert!(!user.is_broker);
}

#[test]
fn user_rejects_object_id() {
    let result = serde_json::from_str::<User>(r#"{"id":{"n":1},"email":"x@y.com"}"#);
    assert!(result.is_err());
}

#[test]
fn user_serializes_id_as_string() {
    let user = User { id: "9".to_owned(), email: "z@z.com".to_owned(), is_broker: true };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["id"], "9");
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn register_payload_omits_missing_name() {
    let payload = RegisterPayload { email: "a@b.com".to_owned(), password: "pw".to_owned(), name: None };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("name").is_none());
}

#[test]
fn become_broker_response_message_is_optional() {
    let body: BecomeBrokerResponse =
        serde_json::from_str(r#"{"user":{"id":1,"email":"a@b.com","is_broker":true}}"#).unwrap();
    assert!(body.user.is_broker);
    assert!(body.message.is_none());
}

// =============================================================
// Enums
// =============================================================

#[test]
fn escrow_role_uses_screaming_snake_case() {
    assert_eq!(serde_json::to_string(&EscrowRole::CoBroker).unwrap(), "\"CO_BROKER\"");
    let role: EscrowRole = serde_json::from_str("\"BUYER\"").unwrap();
    assert_eq!(role, EscrowRole::Buyer);
}

#[test]
fn unknown_role_and_status_decode_to_other() {
    let role: EscrowRole = serde_json::from_str("\"NOTARY\"").unwrap();
    let status: EscrowStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
    assert_eq!(role, EscrowRole::Other);
    assert_eq!(status, EscrowStatus::Other);
}

#[test]
fn pending_acceptance_status_decodes() {
    let status: EscrowStatus = serde_json::from_str("\"PENDING_ACCEPTANCE\"").unwrap();
    assert_eq!(status, EscrowStatus::PendingAcceptance);
}

#[test]
fn choice_enums_round_trip_through_wire_strings() {
    for currency in Currency::ALL {
        assert_eq!(Currency::from_wire(currency.as_str()), Some(currency));
    }
    for kind in TransactionType::ALL {
        assert_eq!(TransactionType::from_wire(kind.as_str()), Some(kind));
    }
    for kind in PropertyType::ALL {
        assert_eq!(PropertyType::from_wire(kind.as_str()), Some(kind));
    }
    assert_eq!(Currency::from_wire("GBP"), None);
}

#[test]
fn choice_enum_serde_matches_as_str() {
    assert_eq!(serde_json::to_string(&TransactionType::PropertySale).unwrap(), "\"PROPERTY_SALE\"");
    assert_eq!(serde_json::to_string(&PropertyType::Commercial).unwrap(), "\"COMMERCIAL\"");
    assert_eq!(serde_json::to_string(&Currency::Mxn).unwrap(), "\"MXN\"");
}

// =============================================================
// Escrow transactions
// =============================================================

#[test]
fn escrow_transaction_decodes_decimal_string_value() {
    let json = r#"{
        "id": 12,
        "agreement_name": "Casa Roma",
        "property_address": "Calle 1",
        "transaction_type": "PROPERTY_SALE",
        "currency": "MXN",
        "property_value": "2500000.50",
        "estimated_closing_date": "2026-12-01",
        "status": "INVITING",
        "participants": [
            {"id": 3, "email": "buyer@x.com", "role": "BUYER", "has_accepted": false}
        ]
    }"#;
    let escrow: EscrowTransaction = serde_json::from_str(json).unwrap();
    assert_eq!(escrow.id, "12");
    assert_eq!(escrow.property_value, Some(2_500_000.5));
    assert_eq!(escrow.status, EscrowStatus::Inviting);
    assert_eq!(escrow.participants.len(), 1);
    assert_eq!(escrow.participants[0].role, EscrowRole::Buyer);
}

#[test]
fn escrow_transaction_tolerates_null_value_and_missing_optionals() {
    let json = r#"{
        "id": "5",
        "agreement_name": "Lot",
        "property_address": "Somewhere",
        "transaction_type": "BROKERAGE_COMMISSION",
        "currency": "USD",
        "property_value": null,
        "status": "DRAFT"
    }"#;
    let escrow: EscrowTransaction = serde_json::from_str(json).unwrap();
    assert_eq!(escrow.property_value, None);
    assert_eq!(escrow.estimated_closing_date, None);
    assert!(escrow.participants.is_empty());
}

#[test]
fn escrow_transaction_rejects_garbage_decimal() {
    let json = r#"{
        "id": "5", "agreement_name": "Lot", "property_address": "x",
        "transaction_type": "PROPERTY_SALE", "currency": "USD",
        "property_value": "lots", "status": "DRAFT"
    }"#;
    assert!(serde_json::from_str::<EscrowTransaction>(json).is_err());
}

#[test]
fn escrow_summary_list_decodes() {
    let json = r#"[
        {"id": 1, "agreement_name": "A", "status": "ACTIVE", "property_address": "x",
         "transaction_type": "PROPERTY_SALE", "role": "BROKER"},
        {"id": 2, "agreement_name": "B", "status": "DRAFT", "property_address": "y",
         "transaction_type": "PROPERTY_SALE", "role": "SELLER"}
    ]"#;
    let list: Vec<EscrowSummary> = serde_json::from_str(json).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].role, EscrowRole::Seller);
}

#[test]
fn new_escrow_omits_absent_optionals() {
    let body = NewEscrow {
        agreement_name: "Deal".to_owned(),
        currency: Currency::Usd,
        transaction_type: TransactionType::PropertySale,
        property_type: PropertyType::Land,
        property_value: None,
        estimated_closing_date: None,
        property_address: "Main St".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert!(value.get("property_value").is_none());
    assert!(value.get("estimated_closing_date").is_none());
    assert_eq!(value["property_type"], "LAND");
}

// =============================================================
// Invite payload
// =============================================================

#[test]
fn invite_payload_without_co_broker_omits_optional_fields() {
    let payload = InvitePayload {
        cobroker_email: None,
        buyer_email: "buyer@x.com".to_owned(),
        seller_email: Some("seller@x.com".to_owned()),
        broker_share_pct: 100.0,
        co_broker_share_pct: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("cobroker_email").is_none());
    assert!(value.get("co_broker_share_pct").is_none());
    assert_eq!(value["seller_email"], "seller@x.com");
    assert_eq!(value["broker_share_pct"], 100.0);
}

// =============================================================
// KYC
// =============================================================

#[test]
fn kyc_form_null_base_fields_become_empty() {
    let json = r#"{"role":"BUYER","full_name":null,"id_number":"X1","date_of_birth":null,
                   "address":"A","occupation":"Dev","tax_id":"RFC"}"#;
    let form: KycForm = serde_json::from_str(json).unwrap();
    assert_eq!(form.full_name, "");
    assert_eq!(form.date_of_birth, "");
    assert_eq!(form.tax_id.as_deref(), Some("RFC"));
    assert!(form.license_number.is_none());
}

#[test]
fn kyc_form_serialization_skips_unset_role_fields() {
    let json = r#"{"role":"BROKER","full_name":"Ana","id_number":"1","date_of_birth":"1990-01-01",
                   "address":"A","occupation":"Broker","license_number":"L-1"}"#;
    let form: KycForm = serde_json::from_str(json).unwrap();
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["license_number"], "L-1");
    assert!(value.get("source_of_funds").is_none());
}
