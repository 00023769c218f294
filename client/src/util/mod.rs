//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form validation, route guarding, and display formatting live here as pure
//! functions so pages stay thin and the rules are testable natively.

pub mod display;
pub mod escrow_form;
pub mod guard;
pub mod invite_form;
pub mod kyc_form;
