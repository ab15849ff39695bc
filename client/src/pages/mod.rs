//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its fetches and write actions)
//! and delegates rendering details to `components`.

pub mod admin;
pub mod cart;
pub mod details;
pub mod games;
pub mod login;
pub mod order_details;
pub mod orders;
pub mod signup;
