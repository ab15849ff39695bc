//! Shared wire DTOs for the store API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the store API emits, field names included
//! (`game_ID`, `stockQuantity`, `totalAmount`, ...). Ids are accepted as
//! numbers or strings and held as strings; money goes through [`Money`] so
//! decimal strings and floats both land as exact cents.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::util::money::Money;

// =============================================================================
// CATALOG
// =============================================================================

/// A purchasable catalog listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "game_ID", alias = "id", alias = "game_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    pub price: Money,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub genre: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub platform: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Units available; `0` means the listing cannot be added to a cart.
    #[serde(
        rename = "stockQuantity",
        alias = "stock_quantity",
        default,
        deserialize_with = "deserialize_count"
    )]
    pub stock_quantity: u32,
    #[serde(rename = "releaseDate", alias = "release_date", default)]
    pub release_date: Option<String>,
}

impl Game {
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// One entry of `/api/games/genres/all`: either a bare name or `{ "name": ... }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GenreEntry {
    Name(String),
    Named { name: String },
}

impl GenreEntry {
    #[must_use]
    pub fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Named { name } => name,
        }
    }
}

// =============================================================================
// CART
// =============================================================================

/// A single cart line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "game_ID", alias = "game_id", deserialize_with = "deserialize_id")]
    pub game_id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "deserialize_count")]
    pub quantity: u32,
    /// Unit price.
    pub price: Money,
    /// Server-computed `quantity × price`.
    #[serde(default)]
    pub total_price: Money,
}

/// The signed-in user's cart as returned by `GET /api/cart`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: Money,
    /// Last update time as sent by the server.
    #[serde(default)]
    pub timestamp: Option<String>,
}

// =============================================================================
// ORDERS
// =============================================================================

/// Order lifecycle status. Unknown strings are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Statuses an administrator may assign.
    pub const ASSIGNABLE: [Self; 3] = [Self::Pending, Self::Completed, Self::Cancelled];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Pending" => Self::Pending,
            "Completed" => Self::Completed,
            "Cancelled" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// A line of a placed order, carrying the price paid at checkout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "game_ID", alias = "game_id", deserialize_with = "deserialize_id")]
    pub game_id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "deserialize_count")]
    pub quantity: u32,
    pub price: Money,
}

/// A placed order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_ID", alias = "orderId", alias = "order_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "user_ID", alias = "user_id", default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    /// Owner display name; only present in admin listings.
    #[serde(rename = "user_Name", alias = "username", default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(rename = "paymentMethod", alias = "payment_method", default)]
    pub payment_method: Option<String>,
    #[serde(rename = "paymentStatus", alias = "payment_status", default)]
    pub payment_status: Option<String>,
    #[serde(rename = "totalAmount", alias = "total_amount", alias = "total")]
    pub total: Money,
    #[serde(rename = "orderDate", alias = "order_date", default)]
    pub placed_at: Option<String>,
}

// =============================================================================
// USERS + SESSION
// =============================================================================

/// Account role. Anything other than `"admin"` is a regular account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Regular(String),
}

impl Default for Role {
    fn default() -> Self {
        Self::Regular("user".to_owned())
    }
}

impl Role {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Regular(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        if raw == "admin" { Self::Admin } else { Self::Regular(raw) }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "admin".to_owned(),
            Role::Regular(raw) => raw,
        }
    }
}

/// A user row in the admin dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "user_ID", alias = "id", alias = "user_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "user_Name", alias = "username", alias = "name", default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// The authenticated identity reported by `/api/auth/check` and login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "user_ID", alias = "userId", alias = "user_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "user_Name", alias = "name", default, deserialize_with = "deserialize_text")]
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

/// Body of `GET /api/auth/check`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthCheck {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Body of a successful login or signup.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// ENVELOPES + REQUEST BODIES
// =============================================================================

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderEnvelope {
    pub order: Order,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct InventoryEnvelope {
    #[serde(default)]
    pub inventory: Vec<Game>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub users: Vec<AdminUser>,
}

/// Reply to `POST /api/orders/checkout`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckoutReply {
    #[serde(rename = "orderId", alias = "order_ID", alias = "order_id", deserialize_with = "deserialize_id")]
    pub order_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ "message": ... }` reply used by write endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageReply {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddToCartRequest {
    #[serde(rename = "game_ID")]
    pub game_id: String,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InventoryUpdateRequest {
    #[serde(rename = "stockQuantity")]
    pub stock_quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// LENIENT FIELD DESERIALIZERS
// =============================================================================

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(raw) => Ok(raw),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(raw) => Ok(Some(raw)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(u32::try_from(int).unwrap_or(u32::MAX));
            }
            if number.as_i64().is_some() {
                // Negative counts are clamped.
                return Ok(0);
            }
            Err(D::Error::custom("expected integer count"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("invalid count: {raw:?}"))),
        _ => Err(D::Error::custom("expected integer count")),
    }
}
