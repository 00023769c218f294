//! Create-escrow form model.
//!
//! Select inputs hold wire values (`"PROPERTY_SALE"`), text inputs hold raw
//! strings; [`EscrowForm::validate`] turns both into a [`NewEscrow`].

#[cfg(test)]
#[path = "escrow_form_test.rs"]
mod escrow_form_test;

use chrono::NaiveDate;

use crate::net::types::{Currency, NewEscrow, PropertyType, TransactionType};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EscrowForm {
    pub agreement_name: String,
    pub currency: Currency,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    /// Raw number input; blank means "not provided".
    pub property_value: String,
    /// `YYYY-MM-DD` from a date input; blank means "not provided".
    pub estimated_closing_date: String,
    pub property_address: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EscrowFormError {
    #[error("Agreement name is required.")]
    AgreementNameRequired,
    #[error("Property address is required.")]
    PropertyAddressRequired,
    #[error("Property value must be a non-negative number.")]
    InvalidPropertyValue,
    #[error("Estimated closing date must be a valid date.")]
    InvalidClosingDate,
}

impl EscrowForm {
    /// # Errors
    ///
    /// Returns the first [`EscrowFormError`] found.
    pub fn validate(&self) -> Result<NewEscrow, EscrowFormError> {
        let agreement_name = self.agreement_name.trim();
        if agreement_name.is_empty() {
            return Err(EscrowFormError::AgreementNameRequired);
        }
        let property_address = self.property_address.trim();
        if property_address.is_empty() {
            return Err(EscrowFormError::PropertyAddressRequired);
        }

        let property_value = match self.property_value.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
                _ => return Err(EscrowFormError::InvalidPropertyValue),
            },
        };

        let estimated_closing_date = match self.estimated_closing_date.trim() {
            "" => None,
            raw if is_iso_date(raw) => Some(raw.to_owned()),
            _ => return Err(EscrowFormError::InvalidClosingDate),
        };

        Ok(NewEscrow {
            agreement_name: agreement_name.to_owned(),
            currency: self.currency,
            transaction_type: self.transaction_type,
            property_type: self.property_type,
            property_value,
            estimated_closing_date,
            property_address: property_address.to_owned(),
        })
    }
}

/// Calendar date in `YYYY-MM-DD` form, as a date input submits it.
fn is_iso_date(raw: &str) -> bool {
    raw.len() == 10 && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}
