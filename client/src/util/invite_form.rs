//! Invitation form validation and commission-split rules.
//!
//! DESIGN
//! ======
//! A broker invites the buyer and seller, optionally sharing the commission
//! with a co-broker. With a co-broker the two shares must total 100% (within
//! [`SHARE_TOLERANCE`]) and the seller may be left for the co-broker to
//! invite. Without one the broker keeps 100% and must name the seller.
//!
//! Validation is a pure function of the field values; checks run in a fixed
//! order and the first failure wins.

#[cfg(test)]
#[path = "invite_form_test.rs"]
mod invite_form_test;

use crate::net::types::InvitePayload;

/// Allowed deviation from 100 when summing broker and co-broker shares.
pub const SHARE_TOLERANCE: f64 = 0.0001;

/// Share the broker holds when nobody splits the commission.
pub const FULL_SHARE: f64 = 100.0;

/// Raw field values of the invite form.
///
/// Shares are `NaN` when the input does not hold a number; see [`parse_share`].
#[derive(Clone, Debug, PartialEq)]
pub struct InviteForm {
    pub co_broker_email: String,
    pub buyer_email: String,
    pub seller_email: String,
    pub broker_share: f64,
    pub co_broker_share: f64,
}

impl Default for InviteForm {
    fn default() -> Self {
        Self {
            co_broker_email: String::new(),
            buyer_email: String::new(),
            seller_email: String::new(),
            broker_share: FULL_SHARE,
            co_broker_share: 0.0,
        }
    }
}

/// First rule the form breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InviteError {
    #[error("Buyer email is required.")]
    BuyerEmailRequired,
    #[error("Seller email is required when there is no co-broker.")]
    SellerEmailRequired,
    #[error("Enter both the broker and co-broker commission percentages.")]
    SharesMissing,
    #[error("Broker and co-broker shares must add up to 100%.")]
    SharesMustTotalHundred,
    #[error("Without a co-broker, the broker must hold 100% of the commission.")]
    BrokerMustHoldAll,
}

impl InviteForm {
    /// Whether a co-broker email has been entered.
    pub fn has_co_broker(&self) -> bool {
        !self.co_broker_email.trim().is_empty()
    }

    /// Check every rule and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the first [`InviteError`] the form violates.
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<InvitePayload, InviteError> {
        let buyer_email = self.buyer_email.trim();
        if buyer_email.is_empty() {
            return Err(InviteError::BuyerEmailRequired);
        }

        let has_co_broker = self.has_co_broker();
        let seller_email = self.seller_email.trim();
        if !has_co_broker && seller_email.is_empty() {
            return Err(InviteError::SellerEmailRequired);
        }

        if has_co_broker {
            if !self.broker_share.is_finite() || !self.co_broker_share.is_finite() {
                return Err(InviteError::SharesMissing);
            }
            let total = self.broker_share + self.co_broker_share;
            if (total - FULL_SHARE).abs() > SHARE_TOLERANCE {
                return Err(InviteError::SharesMustTotalHundred);
            }
        } else if self.broker_share != FULL_SHARE {
            return Err(InviteError::BrokerMustHoldAll);
        }

        Ok(InvitePayload {
            cobroker_email: has_co_broker.then(|| self.co_broker_email.trim().to_owned()),
            buyer_email: buyer_email.to_owned(),
            seller_email: (!seller_email.is_empty()).then(|| seller_email.to_owned()),
            broker_share_pct: if has_co_broker { self.broker_share } else { FULL_SHARE },
            co_broker_share_pct: has_co_broker.then_some(self.co_broker_share),
        })
    }
}

/// Parse a percentage input; blank, non-numeric, or overflowing text yields `NaN`.
pub fn parse_share(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(f64::NAN)
}
