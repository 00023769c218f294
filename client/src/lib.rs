//! # escrow-client
//!
//! Leptos + WASM frontend for the escrow platform. Brokers draft escrow
//! transactions and invite buyers, sellers, and co-brokers; every participant
//! signs in, reviews their escrows, and completes KYC.
//!
//! This crate contains pages, components, session state, and the REST
//! client. Validation rules live in `util` and run natively under test.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
