//! Admin dashboard tab and edit rules.
//!
//! DESIGN
//! ======
//! Each tab is one resource; switching tabs refetches. Edits are validated
//! before a request is built so a cleared or non-numeric stock field never
//! reaches the API.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{AdminUser, Game, Order, OrderStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdminTab {
    #[default]
    Orders,
    Inventory,
    Users,
}

impl AdminTab {
    pub const ALL: [Self; 3] = [Self::Orders, Self::Inventory, Self::Users];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::Inventory => "Inventory",
            Self::Users => "Users",
        }
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Orders => "Recent Orders",
            Self::Inventory => "Inventory Management",
            Self::Users => "User Management",
        }
    }
}

/// Content of the active tab.
#[derive(Clone, Debug, PartialEq)]
pub enum AdminData {
    Orders(Vec<Order>),
    Inventory(Vec<Game>),
    Users(Vec<AdminUser>),
}

impl AdminData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Orders(rows) => rows.is_empty(),
            Self::Inventory(rows) => rows.is_empty(),
            Self::Users(rows) => rows.is_empty(),
        }
    }
}

/// Parse the stock input; only non-negative integers are accepted.
#[must_use]
pub fn parse_stock_input(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Parse a status `<select>` value, accepting only assignable statuses.
#[must_use]
pub fn parse_status_choice(raw: &str) -> Option<OrderStatus> {
    OrderStatus::ASSIGNABLE.into_iter().find(|status| status.as_str() == raw)
}

/// A status change is sent only when it differs from the current one.
#[must_use]
pub fn status_change(current: &OrderStatus, raw_choice: &str) -> Option<OrderStatus> {
    parse_status_choice(raw_choice).filter(|next| next != current)
}

/// A stock change is sent only when it parses and differs from the current count.
#[must_use]
pub fn stock_change(current: u32, raw_input: &str) -> Option<u32> {
    parse_stock_input(raw_input).filter(|next| *next != current)
}
