//! Client-side session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the pure session transitions, `storage` persists them, and
//! `session` exposes them to views as a shared reactive handle.

pub mod auth;
pub mod session;
pub mod storage;
