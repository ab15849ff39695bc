//! API error taxonomy for the REST layer.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success response collapses into one displayable message. Two
//! cases are distinguished because pages react to them differently: `401`
//! (redirect to login) and an inventory-unavailable reply on add-to-cart
//! (delayed redirect back to the catalog).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The session is missing or expired.
    #[error("Unauthorized")]
    Unauthorized,
    /// Non-success HTTP status with the message the server provided.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body text.
    ///
    /// `fallback` is used when the body carries no usable message.
    #[must_use]
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = body_message(body).unwrap_or_else(|| fallback.to_owned());
        Self::Status { status, message }
    }

    /// Whether the server refused a cart write because stock ran out.
    #[must_use]
    pub fn is_inventory_unavailable(&self) -> bool {
        let Self::Status { message, .. } = self else {
            return false;
        };
        let lower = message.to_ascii_lowercase();
        STOCK_REFUSALS.iter().any(|phrase| lower.contains(phrase))
    }
}

/// Phrases the store uses when a cart write exceeds available stock.
const STOCK_REFUSALS: [&str; 5] = [
    "out of stock",
    "insufficient stock",
    "insufficient inventory",
    "not enough stock",
    "not enough inventory",
];

/// Pull a human-readable message out of an error body.
///
/// Order: JSON `message`, JSON `error`, then the raw text when it is short
/// and not itself JSON.
pub(crate) fn body_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return ["message", "error"].iter().find_map(|key| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .filter(|message| !message.trim().is_empty())
                .map(str::to_owned)
        });
    }
    if trimmed.len() <= MAX_PLAIN_MESSAGE_LEN && !trimmed.starts_with('<') {
        return Some(trimmed.to_owned());
    }
    None
}

/// Longest plain-text body shown verbatim; longer bodies are usually HTML error pages.
const MAX_PLAIN_MESSAGE_LEN: usize = 200;
