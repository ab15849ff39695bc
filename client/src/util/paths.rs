//! Client route paths.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const GAMES: &str = "/games";
pub const CART: &str = "/cart";
pub const ORDERS: &str = "/orders";
pub const ADMIN: &str = "/admin";

#[must_use]
pub fn details(game_id: &str) -> String {
    format!("/details/{}", urlencoding::encode(game_id))
}

#[must_use]
pub fn order(order_id: &str) -> String {
    format!("/orders/{}", urlencoding::encode(order_id))
}
