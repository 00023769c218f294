//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session through `use_auth` and leave data
//! fetching to pages.

pub mod escrow_card;
pub mod nav_bar;
pub mod protected_route;
pub mod session_notice;
