use super::*;

fn filled() -> EscrowForm {
    EscrowForm {
        agreement_name: " Casa Roma ".to_owned(),
        currency: Currency::Mxn,
        transaction_type: TransactionType::PropertySale,
        property_type: PropertyType::Apartment,
        property_value: "2500000.50".to_owned(),
        estimated_closing_date: "2026-12-01".to_owned(),
        property_address: " Calle 1, CDMX ".to_owned(),
    }
}

#[test]
fn valid_form_builds_trimmed_payload() {
    let escrow = filled().validate().unwrap();
    assert_eq!(escrow.agreement_name, "Casa Roma");
    assert_eq!(escrow.property_address, "Calle 1, CDMX");
    assert_eq!(escrow.property_value, Some(2_500_000.5));
    assert_eq!(escrow.estimated_closing_date.as_deref(), Some("2026-12-01"));
    assert_eq!(escrow.currency, Currency::Mxn);
}

#[test]
fn blank_optionals_are_omitted() {
    let form = EscrowForm { property_value: "  ".to_owned(), estimated_closing_date: String::new(), ..filled() };
    let escrow = form.validate().unwrap();
    assert_eq!(escrow.property_value, None);
    assert_eq!(escrow.estimated_closing_date, None);
}

#[test]
fn agreement_name_is_required() {
    let form = EscrowForm { agreement_name: "  ".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(EscrowFormError::AgreementNameRequired));
}

#[test]
fn property_address_is_required() {
    let form = EscrowForm { property_address: String::new(), ..filled() };
    assert_eq!(form.validate(), Err(EscrowFormError::PropertyAddressRequired));
}

#[test]
fn negative_or_non_numeric_value_is_rejected() {
    for raw in ["-1", "abc", "inf", "NaN"] {
        let form = EscrowForm { property_value: raw.to_owned(), ..filled() };
        assert_eq!(form.validate(), Err(EscrowFormError::InvalidPropertyValue), "input {raw:?}");
    }
}

#[test]
fn malformed_closing_date_is_rejected() {
    for raw in ["2026-13-01", "2026-1-01", "01/12/2026", "2026-12-01-01", "2026-12-00"] {
        let form = EscrowForm { estimated_closing_date: raw.to_owned(), ..filled() };
        assert_eq!(form.validate(), Err(EscrowFormError::InvalidClosingDate), "input {raw:?}");
    }
}

#[test]
fn impossible_calendar_date_is_rejected() {
    for raw in ["2025-02-31", "2025-02-29", "2026-04-31"] {
        let form = EscrowForm { estimated_closing_date: raw.to_owned(), ..filled() };
        assert_eq!(form.validate(), Err(EscrowFormError::InvalidClosingDate), "input {raw:?}");
    }
}

#[test]
fn leap_day_is_accepted() {
    let form = EscrowForm { estimated_closing_date: "2028-02-29".to_owned(), ..filled() };
    assert_eq!(form.validate().unwrap().estimated_closing_date.as_deref(), Some("2028-02-29"));
}

#[test]
fn default_form_uses_first_choices() {
    let form = EscrowForm::default();
    assert_eq!(form.currency, Currency::Usd);
    assert_eq!(form.transaction_type, TransactionType::BrokerageCommission);
    assert_eq!(form.property_type, PropertyType::House);
}
