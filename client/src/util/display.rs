//! Presentation helpers for escrow data.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::net::types::{EscrowRole, EscrowStatus, TransactionType};

/// BEM modifier class for a role badge.
pub fn role_badge_class(role: EscrowRole) -> &'static str {
    match role {
        EscrowRole::Broker | EscrowRole::CoBroker => "role-badge role-badge--broker",
        EscrowRole::Buyer => "role-badge role-badge--buyer",
        EscrowRole::Seller => "role-badge role-badge--seller",
        EscrowRole::Other => "role-badge",
    }
}

pub fn role_label(role: EscrowRole) -> &'static str {
    match role {
        EscrowRole::Broker => "broker",
        EscrowRole::CoBroker => "co-broker",
        EscrowRole::Buyer => "buyer",
        EscrowRole::Seller => "seller",
        EscrowRole::Other => "participant",
    }
}

pub fn status_label(status: EscrowStatus) -> &'static str {
    match status {
        EscrowStatus::Draft => "Draft",
        EscrowStatus::Inviting => "Inviting",
        EscrowStatus::PendingAcceptance => "Pending acceptance",
        EscrowStatus::Active => "Active",
        EscrowStatus::Cancelled => "Cancelled",
        EscrowStatus::Completed => "Completed",
        EscrowStatus::Other => "Unknown",
    }
}

/// Human label for a raw transaction type, falling back to the raw value.
pub fn transaction_type_label(raw: &str) -> String {
    TransactionType::from_wire(raw).map_or_else(|| raw.to_owned(), |t| t.label().to_owned())
}

/// `"MXN 2,500,000.50"`, or `"Not set"` when the value is unknown.
pub fn format_money(currency: &str, value: Option<f64>) -> String {
    let Some(value) = value else {
        return "Not set".to_owned();
    };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{currency} {sign}{grouped}.{cents}")
}
