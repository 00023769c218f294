//! Wire DTOs for the escrow REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON exactly. Decoding is tolerant where the
//! backend is loose: ids may arrive as integers or strings, decimals as
//! numbers or strings, and role/status values the client does not know decode
//! to an `Other` variant instead of failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by login, register, and become-broker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Whether the user may create escrows and invite participants.
    #[serde(default)]
    pub is_broker: bool,
}

/// Body returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body returned by `POST /auth/become-broker`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BecomeBrokerResponse {
    /// The caller's refreshed user record.
    pub user: User,
    /// Optional human-readable note from the server.
    #[serde(default)]
    pub message: Option<String>,
}

/// Role a participant holds in an escrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscrowRole {
    Broker,
    CoBroker,
    Buyer,
    Seller,
    /// Any role string this client does not know about.
    #[serde(other)]
    Other,
}

/// Lifecycle status of an escrow transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscrowStatus {
    Draft,
    Inviting,
    PendingAcceptance,
    Active,
    Cancelled,
    Completed,
    #[serde(other)]
    Other,
}

/// Settlement currency accepted by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    #[default]
    Usd,
    Mxn,
    Eur,
}

impl Currency {
    pub const ALL: [Self; 3] = [Self::Usd, Self::Mxn, Self::Eur];

    /// Wire value, also used as the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Mxn => "MXN",
            Self::Eur => "EUR",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Kind of escrow agreement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    BrokerageCommission,
    PropertySale,
}

impl TransactionType {
    pub const ALL: [Self; 2] = [Self::BrokerageCommission, Self::PropertySale];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrokerageCommission => "BROKERAGE_COMMISSION",
            Self::PropertySale => "PROPERTY_SALE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BrokerageCommission => "Brokerage commission",
            Self::PropertySale => "Property sale",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Kind of property being transacted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    #[default]
    House,
    Apartment,
    Land,
    Commercial,
    Other,
}

impl PropertyType {
    pub const ALL: [Self; 5] = [Self::House, Self::Apartment, Self::Land, Self::Commercial, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::House => "HOUSE",
            Self::Apartment => "APARTMENT",
            Self::Land => "LAND",
            Self::Commercial => "COMMERCIAL",
            Self::Other => "OTHER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Land => "Land",
            Self::Commercial => "Commercial",
            Self::Other => "Other",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// A participant attached to an escrow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EscrowParticipant {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    pub role: EscrowRole,
    #[serde(default)]
    pub has_accepted: bool,
}

/// Full escrow transaction as returned by `GET /escrows/{id}/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EscrowTransaction {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub agreement_name: String,
    pub property_address: String,
    /// Raw transaction type; see [`TransactionType::from_wire`].
    pub transaction_type: String,
    /// Raw currency code.
    pub currency: String,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub property_value: Option<f64>,
    #[serde(default)]
    pub estimated_closing_date: Option<String>,
    pub status: EscrowStatus,
    #[serde(default)]
    pub participants: Vec<EscrowParticipant>,
}

/// Dashboard list entry from `GET /escrows/`, annotated with the caller's role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EscrowSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub agreement_name: String,
    pub status: EscrowStatus,
    pub property_address: String,
    pub transaction_type: String,
    pub role: EscrowRole,
}

/// Body for `POST /escrows/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewEscrow {
    pub agreement_name: String,
    pub currency: Currency,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_closing_date: Option<String>,
    pub property_address: String,
}

/// Body for `POST /escrows/{id}/invite/`.
///
/// Optional fields are omitted from the JSON entirely when absent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvitePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cobroker_email: Option<String>,
    pub buyer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_email: Option<String>,
    pub broker_share_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_broker_share_pct: Option<f64>,
}

/// The caller's KYC record from `/kyc/me/`.
///
/// Which optional fields apply depends on `role`; see
/// [`crate::util::kyc_form::role_specific_fields`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KycForm {
    pub role: EscrowRole,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub full_name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub id_number: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub date_of_birth: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub occupation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokerage_firm_name: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("decimal out of range")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid decimal string {raw:?}"))),
        _ => Err(D::Error::custom("expected decimal number or string")),
    }
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
