//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and request orchestration, and delegates
//! validation to `util` and shared rendering to `components`.

pub mod become_broker;
pub mod dashboard;
pub mod escrow_create;
pub mod escrow_invite;
pub mod kyc;
pub mod login;
pub mod register;
