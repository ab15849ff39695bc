//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `catalog`, `cart`, ...) and kept
//! free of Leptos types so every rule here is testable on the host. Pages
//! wrap these in `RwSignal`s.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod fetch;
pub mod orders;
pub mod session;
