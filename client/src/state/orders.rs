//! Order history presentation helpers.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use crate::net::types::{Order, OrderItem, OrderStatus};
use crate::util::money::Money;

/// CSS modifier for an order status badge.
#[must_use]
pub fn status_badge_class(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "status-badge status-badge--completed",
        OrderStatus::Cancelled => "status-badge status-badge--cancelled",
        OrderStatus::Pending => "status-badge status-badge--pending",
        OrderStatus::Other(_) => "status-badge",
    }
}

impl OrderItem {
    /// `quantity × price` at the historical price.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

impl Order {
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0_u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Payment method and status for the detail view, blank fields shown as
    /// [`PAYMENT_NOT_PROVIDED`].
    #[must_use]
    pub fn payment_summary(&self) -> PaymentSummary<'_> {
        PaymentSummary {
            method: shown(self.payment_method.as_deref()),
            status: shown(self.payment_status.as_deref()),
        }
    }
}

pub const PAYMENT_NOT_PROVIDED: &str = "Not provided";

fn shown(field: Option<&str>) -> &str {
    field.filter(|value| !value.trim().is_empty()).unwrap_or(PAYMENT_NOT_PROVIDED)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentSummary<'a> {
    pub method: &'a str,
    pub status: &'a str,
}
