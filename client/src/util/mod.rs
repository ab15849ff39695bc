//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure pieces stay unit testable.

pub mod debounce;
pub mod fetch;
pub mod format;
pub mod money;
pub mod paths;
