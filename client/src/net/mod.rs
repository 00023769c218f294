//! Networking modules for the escrow REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` wraps browser fetch with base URL and bearer-token handling,
//! `api` names the endpoints, `types` defines the wire schema, and `error`
//! classifies failures.

pub mod api;
pub mod client;
pub mod error;
pub mod types;
