use super::*;
use crate::config::USER_STORAGE_KEY;
use crate::state::storage::MemoryStorage;

fn config() -> ClientConfig {
    ClientConfig::new("https://escrow.test/api/")
}

// =============================================================
// URL + header construction
// =============================================================

#[test]
fn url_joins_base_and_absolute_path() {
    let client = ApiClient::new(&config(), None);
    assert_eq!(client.url("/escrows/"), "https://escrow.test/api/escrows/");
}

#[test]
fn url_inserts_separator_for_relative_path() {
    let client = ApiClient::new(&config(), None);
    assert_eq!(client.url("kyc/me/"), "https://escrow.test/api/kyc/me/");
}

#[test]
fn authorization_is_bearer_token() {
    let client = ApiClient::new(&config(), Some("t1".to_owned()));
    assert_eq!(client.authorization().as_deref(), Some("Bearer t1"));
}

#[test]
fn authorization_absent_without_token() {
    let client = ApiClient::new(&config(), None);
    assert_eq!(client.authorization(), None);
}

#[test]
fn empty_token_is_treated_as_absent() {
    let client = ApiClient::new(&config(), Some(String::new()));
    assert_eq!(client.token(), None);
    assert_eq!(client.authorization(), None);
}

// =============================================================
// Token sourcing
// =============================================================

#[test]
fn from_storage_reads_persisted_token() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_STORAGE_KEY, "persisted");
    storage.set(USER_STORAGE_KEY, "{}");
    let client = ApiClient::from_storage(&config(), &storage);
    assert_eq!(client.token(), Some("persisted"));
}

#[test]
fn from_storage_without_token_is_anonymous() {
    let storage = MemoryStorage::new();
    let client = ApiClient::from_storage(&config(), &storage);
    assert_eq!(client.token(), None);
}

// =============================================================
// Native stub
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn requests_are_unavailable_natively() {
    let client = ApiClient::new(&config(), Some("t".to_owned()));
    let result = futures::executor::block_on(client.get::<serde_json::Value>("/escrows/"));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(client.post_empty("/auth/logout"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
