//! Process-wide session context.
//!
//! DESIGN
//! ======
//! The session is derived once at application start from `/api/auth/check`
//! and provided as context. Pages and the navbar read it instead of asking
//! the server again; login re-derives it and logout tears it down.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::{AuthCheck, SessionUser};
use crate::util::paths;

/// Who the current visitor is, as far as the client knows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// The initial auth check has not answered yet.
    #[default]
    Unknown,
    Anonymous,
    Authenticated(SessionUser),
}

/// Whether the admin dashboard may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAccess {
    Pending,
    Granted,
    /// Signed in without the admin role.
    Denied,
    SignedOut,
}

impl SessionState {
    /// Derive the session from an auth-check response. Any failure counts as signed out.
    #[must_use]
    pub fn from_check(result: Result<AuthCheck, ApiError>) -> Self {
        match result {
            Ok(AuthCheck { user: Some(user) }) => Self::Authenticated(user),
            Ok(AuthCheck { user: None }) | Err(_) => Self::Anonymous,
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Authenticated(user) if user.role.is_admin())
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unknown | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub fn admin_access(&self) -> AdminAccess {
        match self {
            Self::Unknown => AdminAccess::Pending,
            Self::Anonymous => AdminAccess::SignedOut,
            Self::Authenticated(user) if user.role.is_admin() => AdminAccess::Granted,
            Self::Authenticated(_) => AdminAccess::Denied,
        }
    }

    /// Tear the session down after logout or a rejected request.
    pub fn sign_out(&mut self) {
        *self = Self::Anonymous;
    }

    /// Whether routing to `path` must end this session. Every redirect to the
    /// login page does, unless the visitor is already signed out.
    #[must_use]
    pub fn ends_on_route(&self, path: &str) -> bool {
        path == paths::LOGIN && !matches!(self, Self::Anonymous)
    }
}
