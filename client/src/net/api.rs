//! REST API calls against the store backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookie. Server-side (SSR): stubs returning `ApiError::Network`
//! since these endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path here is relative. The host process forwards `/api/*` to the one
//! configured store origin, so no origin literal lives in the client.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>`; response classification is done by the
//! pure [`decode_response`] so it can be tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AddToCartRequest, AdminUser, AuthCheck, AuthReply, Cart, CheckoutReply, Game, InventoryUpdateRequest, LoginRequest,
    MessageReply, Order, OrderStatus, SignupRequest, StatusUpdateRequest,
};
#[cfg(feature = "hydrate")]
use super::types::{GenreEntry, InventoryEnvelope, OrderEnvelope, OrdersEnvelope, UsersEnvelope};

// =============================================================================
// ENDPOINTS
// =============================================================================

pub const AUTH_CHECK: &str = "/api/auth/check";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_SIGNUP: &str = "/api/auth/signup";
pub const GAMES: &str = "/api/games";
pub const GENRES: &str = "/api/games/genres/all";
pub const CART: &str = "/api/cart";
pub const CART_ADD: &str = "/api/cart/add";
pub const CHECKOUT: &str = "/api/orders/checkout";
pub const MY_ORDERS: &str = "/api/orders/my-orders";
pub const ADMIN_ORDERS: &str = "/api/admin/orders";
pub const ADMIN_INVENTORY: &str = "/api/admin/inventory";
pub const ADMIN_USERS: &str = "/api/admin/users";

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

#[must_use]
pub fn search_endpoint(query: &str) -> String {
    format!("/api/games/search/{}", urlencoding::encode(query))
}

#[must_use]
pub fn genre_endpoint(genre: &str) -> String {
    format!("/api/games/filter/genre/{}", urlencoding::encode(genre))
}

#[must_use]
pub fn game_details_endpoint(game_id: &str) -> String {
    format!("/api/games/details/{}", urlencoding::encode(game_id))
}

#[must_use]
pub fn order_endpoint(order_id: &str) -> String {
    format!("/api/orders/{}", urlencoding::encode(order_id))
}

#[must_use]
pub fn admin_order_status_endpoint(order_id: &str) -> String {
    format!("/api/admin/orders/{}/status", urlencoding::encode(order_id))
}

#[must_use]
pub fn admin_inventory_endpoint(game_id: &str) -> String {
    format!("/api/admin/inventory/{}", urlencoding::encode(game_id))
}

// =============================================================================
// RESPONSE DECODING
// =============================================================================

/// Turn a status + body into a typed reply or an [`ApiError`].
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for `401`, `ApiError::Status` for other
/// non-2xx statuses, and `ApiError::Decode` when a success body is empty or
/// has the wrong shape.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body, fallback));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(format!("{fallback}: {e}")))
}

/// Like [`decode_response`] for writes whose only payload is an optional
/// message: an empty success body is a reply without one.
///
/// # Errors
///
/// Same classification as [`decode_response`].
pub fn decode_message_reply(status: u16, body: &str, fallback: &str) -> Result<MessageReply, ApiError> {
    if (200..300).contains(&status) && body.trim().is_empty() {
        return Ok(MessageReply::default());
    }
    decode_response(status, body, fallback)
}

#[cfg(feature = "hydrate")]
async fn send<B: serde::Serialize>(
    method: gloo_net::http::Method,
    url: &str,
    body: Option<&B>,
) -> Result<(u16, String), ApiError> {
    use gloo_net::http::RequestBuilder;

    let builder = RequestBuilder::new(url)
        .method(method)
        .credentials(web_sys::RequestCredentials::Include);
    let sent = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, text))
}

#[cfg(feature = "hydrate")]
async fn request<B, T>(method: gloo_net::http::Method, url: &str, body: Option<&B>, fallback: &str) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: DeserializeOwned,
{
    let (status, text) = send(method, url, body).await?;
    decode_response(status, &text, fallback)
}

#[cfg(feature = "hydrate")]
async fn request_message<B: serde::Serialize>(
    method: gloo_net::http::Method,
    url: &str,
    body: Option<&B>,
    fallback: &str,
) -> Result<MessageReply, ApiError> {
    let (status, text) = send(method, url, body).await?;
    decode_message_reply(status, &text, fallback)
}

#[cfg(feature = "hydrate")]
async fn get<T: DeserializeOwned>(url: &str, fallback: &str) -> Result<T, ApiError> {
    request::<(), T>(gloo_net::http::Method::GET, url, None, fallback).await
}

// =============================================================================
// AUTH
// =============================================================================

/// Ask the server whether the cookie session is valid.
///
/// # Errors
///
/// `ApiError::Unauthorized` when there is no session.
pub async fn check_session() -> Result<AuthCheck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get(AUTH_CHECK, "Failed to check session").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// End the current session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns the server's message when logout is refused.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_message::<()>(gloo_net::http::Method::POST, AUTH_LOGOUT, None, "Logout failed")
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Sign in with email + password.
///
/// # Errors
///
/// Returns the server's message for rejected credentials.
pub async fn login(body: &LoginRequest) -> Result<AuthReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(gloo_net::http::Method::POST, AUTH_LOGIN, Some(body), "Login failed").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Create an account.
///
/// # Errors
///
/// Returns the server's message when registration is refused.
pub async fn signup(body: &SignupRequest) -> Result<AuthReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request(gloo_net::http::Method::POST, AUTH_SIGNUP, Some(body), "Signup failed").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Fetch a game listing from one of the catalog endpoints.
///
/// # Errors
///
/// Returns an `ApiError` when the listing cannot be loaded.
pub async fn fetch_games(endpoint: &str) -> Result<Vec<Game>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get(endpoint, "Failed to fetch games").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch the distinct genre names.
///
/// # Errors
///
/// Returns an `ApiError` when the genre list cannot be loaded.
pub async fn fetch_genres() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let entries: Vec<GenreEntry> = get(GENRES, "Failed to fetch genres").await?;
        Ok(entries.into_iter().map(GenreEntry::into_name).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch a single game.
///
/// # Errors
///
/// Returns an `ApiError` when the game cannot be loaded.
pub async fn fetch_game(game_id: &str) -> Result<Game, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get(&game_details_endpoint(game_id), "Failed to fetch game details").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = game_id;
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

// =============================================================================
// CART + CHECKOUT
// =============================================================================

/// Add a game to the session's cart.
///
/// # Errors
///
/// Returns an `ApiError`; stock refusals satisfy `is_inventory_unavailable`.
pub async fn add_to_cart(body: &AddToCartRequest) -> Result<MessageReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_message(gloo_net::http::Method::POST, CART_ADD, Some(body), "Failed to add to cart").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch the session's cart.
///
/// # Errors
///
/// Returns an `ApiError` when the cart cannot be loaded.
pub async fn fetch_cart() -> Result<Cart, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get(CART, "Failed to fetch cart").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Convert the cart into an order.
///
/// # Errors
///
/// Returns an `ApiError` when checkout is refused.
pub async fn checkout() -> Result<CheckoutReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request::<(), CheckoutReply>(gloo_net::http::Method::POST, CHECKOUT, None, "Checkout failed").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

// =============================================================================
// ORDERS
// =============================================================================

/// Fetch the session's order history.
///
/// # Errors
///
/// Returns an `ApiError` when the history cannot be loaded.
pub async fn fetch_my_orders() -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: OrdersEnvelope = get(MY_ORDERS, "Failed to fetch orders").await?;
        Ok(envelope.orders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch one order.
///
/// # Errors
///
/// Returns an `ApiError` when the order cannot be loaded.
pub async fn fetch_order(order_id: &str) -> Result<Order, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: OrderEnvelope = get(&order_endpoint(order_id), "Failed to fetch order details").await?;
        Ok(envelope.order)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = order_id;
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// Fetch every order (admin).
///
/// # Errors
///
/// Returns an `ApiError` when the listing cannot be loaded.
pub async fn fetch_admin_orders() -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: OrdersEnvelope = get(ADMIN_ORDERS, "Failed to fetch orders").await?;
        Ok(envelope.orders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Set an order's status (admin).
///
/// # Errors
///
/// Returns an `ApiError` when the update is refused.
pub async fn update_order_status(order_id: &str, status: OrderStatus) -> Result<MessageReply, ApiError> {
    let body = StatusUpdateRequest { status };
    #[cfg(feature = "hydrate")]
    {
        request_message(
            gloo_net::http::Method::PUT,
            &admin_order_status_endpoint(order_id),
            Some(&body),
            "Failed to update status",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (order_id, body);
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch the inventory listing (admin).
///
/// # Errors
///
/// Returns an `ApiError` when the listing cannot be loaded.
pub async fn fetch_inventory() -> Result<Vec<Game>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: InventoryEnvelope = get(ADMIN_INVENTORY, "Failed to fetch inventory").await?;
        Ok(envelope.inventory)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Set a game's stock count (admin).
///
/// # Errors
///
/// Returns an `ApiError` when the update is refused.
pub async fn update_inventory(game_id: &str, stock_quantity: u32) -> Result<MessageReply, ApiError> {
    let body = InventoryUpdateRequest { stock_quantity };
    #[cfg(feature = "hydrate")]
    {
        request_message(
            gloo_net::http::Method::PUT,
            &admin_inventory_endpoint(game_id),
            Some(&body),
            "Failed to update inventory",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (game_id, body);
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch every user account (admin).
///
/// # Errors
///
/// Returns an `ApiError` when the listing cannot be loaded.
pub async fn fetch_users() -> Result<Vec<AdminUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: UsersEnvelope = get(ADMIN_USERS, "Failed to fetch users").await?;
        Ok(envelope.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}
