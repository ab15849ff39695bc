//! Networking modules for the store REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies failures, and `types`
//! defines the JSON records exchanged with the store backend.

pub mod api;
pub mod error;
pub mod types;
