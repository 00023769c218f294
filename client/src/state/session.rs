//! Session context: the explicitly constructed auth handle pages share.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`AuthContext`] at startup (rehydrating from storage) and
//! provides it through Leptos context. Pages fetch it with [`use_auth`], which
//! reports a missing provider as an error value instead of panicking.
//!
//! The async flows are generic over [`AuthApi`] so they run against the real
//! HTTP client in the browser and against scripted fakes in tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::auth::{AuthPhase, AuthState};
use super::storage::SharedStorage;
use crate::config::ClientConfig;
use crate::net::api::AuthApi;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, BecomeBrokerResponse, LoginPayload, RegisterPayload, User};

/// Returned by [`use_auth`] when no [`AuthContext`] was provided above the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no auth session provider is installed")]
pub struct MissingAuthProvider;

/// Copyable handle to the shared session signal, its storage, and config.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    storage: StoredValue<SharedStorage>,
    config: StoredValue<ClientConfig>,
}

/// Fetch the session handle provided by `App`.
///
/// # Errors
///
/// Returns [`MissingAuthProvider`] when called outside the provider's tree.
pub fn use_auth() -> Result<AuthContext, MissingAuthProvider> {
    use_context::<AuthContext>().ok_or(MissingAuthProvider)
}

impl AuthContext {
    /// Rehydrate from `storage` and wrap the result in a fresh signal.
    pub fn new(config: ClientConfig, storage: SharedStorage) -> Self {
        let initial = AuthState::rehydrate(storage.as_ref());
        Self { state: RwSignal::new(initial), storage: StoredValue::new(storage), config: StoredValue::new(config) }
    }

    /// Reactive state; read it inside views and effects.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn phase(&self) -> AuthPhase {
        self.state.with_untracked(AuthState::phase)
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// HTTP client carrying the currently persisted token.
    pub fn api(&self) -> ApiClient {
        let storage = self.storage.get_value();
        ApiClient::from_storage(&self.config(), storage.as_ref())
    }

    /// Authenticate with email + password.
    ///
    /// # Errors
    ///
    /// Returns the request's [`ApiError`]; the previous state is kept.
    pub async fn login<A: AuthApi + ?Sized>(&self, api: &A, payload: &LoginPayload) -> Result<User, ApiError> {
        self.state.update(AuthState::begin_authenticating);
        let result = api.login(payload).await;
        self.finish_authentication(result)
    }

    /// Create an account and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns the request's [`ApiError`]; the previous state is kept.
    pub async fn register<A: AuthApi + ?Sized>(&self, api: &A, payload: &RegisterPayload) -> Result<User, ApiError> {
        self.state.update(AuthState::begin_authenticating);
        let result = api.register(payload).await;
        self.finish_authentication(result)
    }

    fn finish_authentication(&self, result: Result<AuthResponse, ApiError>) -> Result<User, ApiError> {
        match result {
            Ok(response) => {
                let user = response.user.clone();
                let storage = self.storage.get_value();
                self.state.update(|s| s.apply_auth_response(response, storage.as_ref()));
                log::info!("signed in as {}", user.email);
                Ok(user)
            }
            Err(e) => {
                log::warn!("authentication failed: {e}");
                self.state.update(AuthState::fail_authenticating);
                Err(e)
            }
        }
    }

    /// Clear the local session, then tell the server.
    ///
    /// `api` should be built before calling so it still carries the token.
    /// The local clear never waits on the server, and a failed notification
    /// is only logged.
    pub async fn logout<A: AuthApi + ?Sized>(&self, api: &A) {
        let storage = self.storage.get_value();
        self.state.update(|s| s.logout(storage.as_ref()));
        log::info!("signed out");
        if let Err(e) = api.logout().await {
            log::debug!("server logout notification failed: {e}");
        }
    }

    /// Replace the signed-in user without touching the token.
    pub fn update_user(&self, user: User) {
        let storage = self.storage.get_value();
        self.state.update(|s| s.update_user(user, storage.as_ref()));
    }

    /// Request broker privileges and adopt the refreshed user on success.
    ///
    /// # Errors
    ///
    /// Returns the request's [`ApiError`] unchanged; a `Status(400)` means a
    /// request is already pending.
    pub async fn become_broker<A: AuthApi + ?Sized>(&self, api: &A) -> Result<BecomeBrokerResponse, ApiError> {
        let response = api.become_broker().await?;
        self.update_user(response.user.clone());
        Ok(response)
    }
}
