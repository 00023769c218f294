//! Thin JSON-over-HTTP client for the escrow API.
//!
//! Browser build (`csr`): real requests via `gloo-net`.
//! Native build: every request resolves to [`ApiError::Unavailable`], which
//! keeps the request-building logic compilable and testable off the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is read from persisted storage when the client is built,
//! so a client constructed before logout still carries the old token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::{ClientConfig, TOKEN_STORAGE_KEY};
use crate::state::storage::SessionStorage;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Request factory bound to one base URL and (optionally) one bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, token: Option<String>) -> Self {
        Self { base_url: config.api_base_url.clone(), token: token.filter(|t| !t.is_empty()) }
    }

    /// Build a client carrying whatever token is currently persisted.
    pub fn from_storage(config: &ClientConfig, storage: &dyn SessionStorage) -> Self {
        Self::new(config, storage.get(TOKEN_STORAGE_KEY))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for an API-relative `path` such as `/escrows/`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// `Authorization` header value, or `None` when anonymous.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// `GET path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// that does not decode as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Get, path, None).await
    }

    /// Send `body` as JSON and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`], plus a `Decode` error if `body` cannot be
    /// serialized.
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(method, path, Some(value)).await
    }

    /// Send `body` as JSON and ignore whatever the server returns on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn send_json_discard<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(method, path, Some(value)).await.map(|_| ())
    }

    /// `POST path` without a body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Post, path, None).await
    }

    /// `POST path` without a body, expecting no meaningful response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Post, path, None).await.map(|_| ())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.execute(method, path, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            self.execute(method, path, body).await?;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "csr")]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        let builder = match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        };
        let sent = match body {
            Some(json) => builder.json(&json).map_err(|e| ApiError::Decode(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            log::debug!("{method:?} {url} -> {}", resp.status());
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }

    #[cfg(not(feature = "csr"))]
    async fn execute(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        let _ = (method, self.url(path), body);
        Err(ApiError::Unavailable)
    }
}
