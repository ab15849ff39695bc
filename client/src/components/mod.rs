//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render store chrome and shared views while reading the session
//! from Leptos context providers.

pub mod back_button;
pub mod game_card;
pub mod navbar;
pub mod status;
pub mod status_badge;
