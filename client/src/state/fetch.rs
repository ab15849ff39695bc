//! Page data-fetch lifecycle shared by every route.
//!
//! DESIGN
//! ======
//! A page owns one `PageData<T>` per resource. Each fetch takes a `Ticket`
//! from `begin()`; only the result carrying the most recent ticket may touch
//! the state. A slower, older response therefore can never overwrite a newer
//! one, and `retire()` drops whatever is still in flight when a page goes away.
//!
//! A `401` never renders as an error: it moves the state to `Redirecting`
//! and tells the caller to navigate to `/login`.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::error::ApiError;

/// Identity of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// What a page should render for a resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    /// A request is outstanding; no data view is shown.
    #[default]
    Loading,
    Ready(T),
    /// Terminal failure with the message to display unchanged.
    Failed(String),
    /// Session rejected; the page renders nothing while navigating away.
    Redirecting,
}

/// Result of settling a response against the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    Applied,
    /// A newer request superseded this one; the response was dropped.
    Stale,
    RedirectToLogin,
}

/// Fetch state plus the sequence used to reject stale responses.
#[derive(Clone, Debug, PartialEq)]
pub struct PageData<T> {
    state: FetchState<T>,
    seq: u64,
}

impl<T> Default for PageData<T> {
    fn default() -> Self {
        Self { state: FetchState::Loading, seq: 0 }
    }
}

impl<T> PageData<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request: enter `Loading` and invalidate every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.seq += 1;
        self.state = FetchState::Loading;
        Ticket(self.seq)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.seq
    }

    /// Apply a response if `ticket` is still the latest request.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Settle {
        if !self.is_current(ticket) {
            return Settle::Stale;
        }
        match result {
            Ok(data) => {
                self.state = FetchState::Ready(data);
                Settle::Applied
            }
            Err(ApiError::Unauthorized) => {
                self.state = FetchState::Redirecting;
                Settle::RedirectToLogin
            }
            Err(err) => {
                self.state = FetchState::Failed(err.to_string());
                Settle::Applied
            }
        }
    }

    /// Invalidate any outstanding ticket without changing what is shown.
    pub fn retire(&mut self) {
        self.seq += 1;
    }

    /// Mark the resource failed outside a fetch (e.g. a write that failed).
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = FetchState::Failed(message.into());
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

}

// =============================================================================
// WRITE ACTIONS
// =============================================================================

/// Status of a single fire-and-forget write (add-to-cart, checkout, admin edits).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl ActionState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) | Self::Failed(message) => Some(message),
            Self::Idle | Self::Pending => None,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
