//! KYC field catalogue and role-dependent requirements.
//!
//! DESIGN
//! ======
//! Every role fills the same base identity fields. Brokers (and co-brokers)
//! add licensing details; buyers and sellers add source-of-funds and tax id.
//! All fields shown for a role are required.

#[cfg(test)]
#[path = "kyc_form_test.rs"]
mod kyc_form_test;

use crate::net::types::{EscrowRole, KycForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KycField {
    FullName,
    IdNumber,
    DateOfBirth,
    Address,
    Occupation,
    SourceOfFunds,
    TaxId,
    LicenseNumber,
    LicenseState,
    BrokerageFirmName,
}

/// Fields every role fills in.
pub const BASE_FIELDS: [KycField; 5] =
    [KycField::FullName, KycField::IdNumber, KycField::DateOfBirth, KycField::Address, KycField::Occupation];

const BROKER_FIELDS: [KycField; 3] = [KycField::LicenseNumber, KycField::LicenseState, KycField::BrokerageFirmName];

const CLIENT_FIELDS: [KycField; 2] = [KycField::SourceOfFunds, KycField::TaxId];

impl KycField {
    /// JSON key and input `name`.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::IdNumber => "id_number",
            Self::DateOfBirth => "date_of_birth",
            Self::Address => "address",
            Self::Occupation => "occupation",
            Self::SourceOfFunds => "source_of_funds",
            Self::TaxId => "tax_id",
            Self::LicenseNumber => "license_number",
            Self::LicenseState => "license_state",
            Self::BrokerageFirmName => "brokerage_firm_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full legal name",
            Self::IdNumber => "ID number",
            Self::DateOfBirth => "Date of birth",
            Self::Address => "Address",
            Self::Occupation => "Occupation",
            Self::SourceOfFunds => "Source of funds",
            Self::TaxId => "Tax ID",
            Self::LicenseNumber => "License number",
            Self::LicenseState => "License state",
            Self::BrokerageFirmName => "Brokerage firm name",
        }
    }

    /// HTML input `type`.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::DateOfBirth => "date",
            _ => "text",
        }
    }

    /// Rendered as a `<textarea>` instead of an `<input>`.
    pub fn multiline(self) -> bool {
        self == Self::Address
    }
}

/// Extra fields required for `role`.
pub fn role_specific_fields(role: EscrowRole) -> &'static [KycField] {
    match role {
        EscrowRole::Broker | EscrowRole::CoBroker => &BROKER_FIELDS,
        EscrowRole::Buyer | EscrowRole::Seller | EscrowRole::Other => &CLIENT_FIELDS,
    }
}

/// Base fields followed by the role's extra fields, in display order.
pub fn visible_fields(role: EscrowRole) -> Vec<KycField> {
    BASE_FIELDS.iter().chain(role_specific_fields(role)).copied().collect()
}

/// Current value of `field`; unset optional fields read as empty.
pub fn field_value(form: &KycForm, field: KycField) -> &str {
    fn optional(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or_default()
    }
    match field {
        KycField::FullName => &form.full_name,
        KycField::IdNumber => &form.id_number,
        KycField::DateOfBirth => &form.date_of_birth,
        KycField::Address => &form.address,
        KycField::Occupation => &form.occupation,
        KycField::SourceOfFunds => optional(&form.source_of_funds),
        KycField::TaxId => optional(&form.tax_id),
        KycField::LicenseNumber => optional(&form.license_number),
        KycField::LicenseState => optional(&form.license_state),
        KycField::BrokerageFirmName => optional(&form.brokerage_firm_name),
    }
}

/// Overwrite `field` with `value`.
pub fn set_field_value(form: &mut KycForm, field: KycField, value: String) {
    match field {
        KycField::FullName => form.full_name = value,
        KycField::IdNumber => form.id_number = value,
        KycField::DateOfBirth => form.date_of_birth = value,
        KycField::Address => form.address = value,
        KycField::Occupation => form.occupation = value,
        KycField::SourceOfFunds => form.source_of_funds = Some(value),
        KycField::TaxId => form.tax_id = Some(value),
        KycField::LicenseNumber => form.license_number = Some(value),
        KycField::LicenseState => form.license_state = Some(value),
        KycField::BrokerageFirmName => form.brokerage_firm_name = Some(value),
    }
}

/// Visible fields that are blank after trimming.
pub fn missing_fields(form: &KycForm) -> Vec<KycField> {
    visible_fields(form.role).into_iter().filter(|f| field_value(form, *f).trim().is_empty()).collect()
}
