//! Cart, add-to-cart and checkout rules.
//!
//! DESIGN
//! ======
//! The cart page always shows the server's `total`; `items_total` exists to
//! check that the lines agree with it. Write actions are classified here so
//! pages only map an outcome to navigation or a message.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::error::ApiError;
use crate::net::types::{AddToCartRequest, Cart, CartItem, CheckoutReply, Game, MessageReply};
use crate::state::fetch::ActionState;
use crate::util::money::Money;
use crate::util::paths;

/// Wait before sending the shopper back to the catalog after a stock refusal.
pub const OUT_OF_STOCK_REDIRECT_MS: u64 = 2000;

const ADDED_MESSAGE: &str = "Added to cart successfully!";

impl CartItem {
    /// `quantity × price` computed locally.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0_u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Sum of every line's `quantity × price`.
    #[must_use]
    pub fn items_total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Whether the server total agrees with the lines.
    #[must_use]
    pub fn total_matches(&self) -> bool {
        self.items_total() == self.total
    }
}

// =============================================================================
// ADD TO CART
// =============================================================================

/// Whether an add-to-cart click may issue a request.
#[derive(Clone, Debug, PartialEq)]
pub enum AddToCartGate {
    Ready(AddToCartRequest),
    OutOfStock,
    Busy,
}

/// Build the add-to-cart request, refusing out-of-stock games and double clicks.
#[must_use]
pub fn prepare_add_to_cart(game: &Game, action: &ActionState) -> AddToCartGate {
    if !game.in_stock() {
        return AddToCartGate::OutOfStock;
    }
    if action.is_pending() {
        return AddToCartGate::Busy;
    }
    AddToCartGate::Ready(AddToCartRequest { game_id: game.id.clone(), quantity: 1 })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddToCartOutcome {
    Added(String),
    RedirectToLogin,
    /// Show the message, then return to the catalog after [`OUT_OF_STOCK_REDIRECT_MS`].
    OutOfStock(String),
    Failed(String),
}

#[must_use]
pub fn classify_add_to_cart(result: Result<MessageReply, ApiError>) -> AddToCartOutcome {
    match result {
        Ok(reply) => AddToCartOutcome::Added(reply.message.unwrap_or_else(|| ADDED_MESSAGE.to_owned())),
        Err(ApiError::Unauthorized) => AddToCartOutcome::RedirectToLogin,
        Err(err) if err.is_inventory_unavailable() => AddToCartOutcome::OutOfStock(err.to_string()),
        Err(err) => AddToCartOutcome::Failed(err.to_string()),
    }
}

impl AddToCartOutcome {
    /// Inline status to show after the outcome.
    #[must_use]
    pub fn into_action_state(self) -> ActionState {
        match self {
            Self::Added(message) => ActionState::Succeeded(message),
            Self::OutOfStock(message) | Self::Failed(message) => ActionState::Failed(message),
            Self::RedirectToLogin => ActionState::Idle,
        }
    }
}

// =============================================================================
// CHECKOUT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Route of the newly created order.
    Navigate(String),
    RedirectToLogin,
    Failed(String),
}

#[must_use]
pub fn can_checkout(cart: &Cart, action: &ActionState) -> bool {
    !cart.is_empty() && !action.is_pending()
}

#[must_use]
pub fn classify_checkout(result: Result<CheckoutReply, ApiError>) -> CheckoutOutcome {
    match result {
        Ok(reply) => CheckoutOutcome::Navigate(paths::order(&reply.order_id)),
        Err(ApiError::Unauthorized) => CheckoutOutcome::RedirectToLogin,
        Err(err) => CheckoutOutcome::Failed(err.to_string()),
    }
}
