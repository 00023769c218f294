//! Endpoint helpers for the escrow REST API.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; callers decide how much of the
//! failure to show. Paths keep the API's trailing-slash conventions exactly.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::client::{ApiClient, Method};
use super::error::ApiError;
use super::types::{
    AuthResponse, BecomeBrokerResponse, EscrowSummary, EscrowTransaction, InvitePayload, KycForm, LoginPayload,
    NewEscrow, RegisterPayload,
};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const BECOME_BROKER_PATH: &str = "/auth/become-broker";
pub const ESCROWS_PATH: &str = "/escrows/";
pub const KYC_ME_PATH: &str = "/kyc/me/";

fn escrow_path(escrow_id: &str) -> String {
    format!("/escrows/{escrow_id}/")
}

fn escrow_invite_path(escrow_id: &str) -> String {
    format!("/escrows/{escrow_id}/invite/")
}

/// Auth endpoints the session flows depend on.
///
/// Implemented by [`ApiClient`]; tests substitute scripted fakes.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, payload: &LoginPayload) -> Result<AuthResponse, ApiError>;
    async fn register(&self, payload: &RegisterPayload) -> Result<AuthResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn become_broker(&self) -> Result<BecomeBrokerResponse, ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, payload: &LoginPayload) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::Post, LOGIN_PATH, payload).await
    }

    async fn register(&self, payload: &RegisterPayload) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::Post, REGISTER_PATH, payload).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty(LOGOUT_PATH).await
    }

    async fn become_broker(&self) -> Result<BecomeBrokerResponse, ApiError> {
        self.post(BECOME_BROKER_PATH).await
    }
}

/// Escrows the caller participates in, each tagged with the caller's role.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_escrows(client: &ApiClient) -> Result<Vec<EscrowSummary>, ApiError> {
    client.get(ESCROWS_PATH).await
}

/// Fetch one escrow with its participants.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn fetch_escrow(client: &ApiClient, escrow_id: &str) -> Result<EscrowTransaction, ApiError> {
    client.get(&escrow_path(escrow_id)).await
}

/// Create an escrow; the server assigns id and status.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn create_escrow(client: &ApiClient, escrow: &NewEscrow) -> Result<EscrowTransaction, ApiError> {
    client.send_json(Method::Post, ESCROWS_PATH, escrow).await
}

/// Invite buyer/seller/co-broker and record the commission split.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn invite_participants(client: &ApiClient, escrow_id: &str, payload: &InvitePayload) -> Result<(), ApiError> {
    client.send_json_discard(Method::Post, &escrow_invite_path(escrow_id), payload).await
}

/// Load the caller's KYC record.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn fetch_kyc(client: &ApiClient) -> Result<KycForm, ApiError> {
    client.get(KYC_ME_PATH).await
}

/// Replace the caller's KYC record.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn save_kyc(client: &ApiClient, form: &KycForm) -> Result<(), ApiError> {
    client.send_json_discard(Method::Put, KYC_ME_PATH, form).await
}
