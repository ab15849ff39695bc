use super::*;

// =============================================================
// Game
// =============================================================

#[test]
fn game_deserializes_api_field_names() {
    let raw = serde_json::json!({
        "game_ID": 7,
        "title": "Hollow Knight",
        "description": "Bugs and bosses.",
        "price": "14.99",
        "genre": "Metroidvania",
        "platform": "PC",
        "image_url": null,
        "stockQuantity": 12,
        "releaseDate": "2017-02-24"
    });
    let game: Game = serde_json::from_value(raw).unwrap();
    assert_eq!(game.id, "7");
    assert_eq!(game.price, Money::from_cents(1499));
    assert_eq!(game.stock_quantity, 12);
    assert_eq!(game.release_date.as_deref(), Some("2017-02-24"));
    assert!(game.image_url.is_none());
    assert!(game.in_stock());
}

#[test]
fn game_tolerates_missing_and_null_optional_fields() {
    let raw = serde_json::json!({
        "game_ID": "g-1",
        "title": "Tetris",
        "description": null,
        "price": 5
    });
    let game: Game = serde_json::from_value(raw).unwrap();
    assert_eq!(game.description, "");
    assert_eq!(game.genre, "");
    assert_eq!(game.stock_quantity, 0);
    assert!(!game.in_stock());
}

#[test]
fn game_stock_accepts_string_and_clamps_negative() {
    let from_string: Game =
        serde_json::from_value(serde_json::json!({"game_ID": 1, "title": "a", "price": 1, "stockQuantity": "3"}))
            .unwrap();
    let negative: Game =
        serde_json::from_value(serde_json::json!({"game_ID": 1, "title": "a", "price": 1, "stockQuantity": -2}))
            .unwrap();
    assert_eq!(from_string.stock_quantity, 3);
    assert_eq!(negative.stock_quantity, 0);
}

#[test]
fn game_rejects_object_id() {
    let raw = serde_json::json!({"game_ID": {"x": 1}, "title": "a", "price": 1});
    assert!(serde_json::from_value::<Game>(raw).is_err());
}

#[test]
fn genre_entries_accept_strings_and_objects() {
    let raw = serde_json::json!(["RPG", {"name": "Shooter"}]);
    let entries: Vec<GenreEntry> = serde_json::from_value(raw).unwrap();
    let names: Vec<String> = entries.into_iter().map(GenreEntry::into_name).collect();
    assert_eq!(names, vec!["RPG".to_owned(), "Shooter".to_owned()]);
}

// =============================================================
// Cart
// =============================================================

#[test]
fn cart_deserializes_items_and_total() {
    let raw = serde_json::json!({
        "items": [
            {"game_ID": 1, "title": "A", "quantity": 2, "price": "10.50", "total_price": "21.00"}
        ],
        "total": "21.00",
        "timestamp": "2024-05-01T10:00:00Z"
    });
    let cart: Cart = serde_json::from_value(raw).unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].game_id, "1");
    assert_eq!(cart.items[0].total_price, Money::from_cents(2100));
    assert_eq!(cart.total, Money::from_cents(2100));
}

#[test]
fn empty_cart_body_defaults() {
    let cart: Cart = serde_json::from_str("{}").unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(cart.total, Money::ZERO);
    assert!(cart.timestamp.is_none());
}

// =============================================================
// Orders
// =============================================================

#[test]
fn order_status_maps_known_and_unknown_strings() {
    assert_eq!(OrderStatus::from("Completed".to_owned()), OrderStatus::Completed);
    assert_eq!(OrderStatus::from("Shipped".to_owned()), OrderStatus::Other("Shipped".to_owned()));
    assert_eq!(serde_json::to_string(&OrderStatus::Cancelled).unwrap(), "\"Cancelled\"");
    assert_eq!(serde_json::to_string(&OrderStatus::Other("Held".to_owned())).unwrap(), "\"Held\"");
}

#[test]
fn order_deserializes_envelope() {
    let raw = serde_json::json!({
        "order": {
            "order_ID": 42,
            "user_ID": 3,
            "status": "Pending",
            "paymentMethod": "card",
            "paymentStatus": "Paid",
            "totalAmount": "29.98",
            "orderDate": "2024-05-01T10:00:00Z",
            "items": [{"game_ID": 1, "title": "A", "quantity": 2, "price": 14.99}]
        }
    });
    let envelope: OrderEnvelope = serde_json::from_value(raw).unwrap();
    let order = envelope.order;
    assert_eq!(order.id, "42");
    assert_eq!(order.user_id.as_deref(), Some("3"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, Money::from_cents(2998));
    assert_eq!(order.items[0].price, Money::from_cents(1499));
    assert_eq!(order.payment_method.as_deref(), Some("card"));
}

#[test]
fn orders_envelope_defaults_to_empty() {
    let envelope: OrdersEnvelope = serde_json::from_str("{}").unwrap();
    assert!(envelope.orders.is_empty());
}

#[test]
fn checkout_reply_accepts_order_id_spellings() {
    let camel: CheckoutReply = serde_json::from_str(r#"{"orderId": 9}"#).unwrap();
    let api: CheckoutReply = serde_json::from_str(r#"{"order_ID": "9", "message": "ok"}"#).unwrap();
    assert_eq!(camel.order_id, "9");
    assert_eq!(api.order_id, "9");
    assert_eq!(api.message.as_deref(), Some("ok"));
}

// =============================================================
// Users + session
// =============================================================

#[test]
fn role_admin_detection() {
    assert!(Role::from("admin".to_owned()).is_admin());
    assert!(!Role::from("customer".to_owned()).is_admin());
    assert_eq!(Role::default().as_str(), "user");
}

#[test]
fn auth_check_reads_nested_user() {
    let raw = serde_json::json!({"user": {"user_ID": 5, "user_Name": "sam", "role": "admin"}});
    let check: AuthCheck = serde_json::from_value(raw).unwrap();
    let user = check.user.unwrap();
    assert_eq!(user.id, "5");
    assert_eq!(user.username, "sam");
    assert!(user.role.is_admin());
}

#[test]
fn auth_check_without_user() {
    let check: AuthCheck = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
    assert!(check.user.is_none());
}

#[test]
fn users_envelope_reads_admin_rows() {
    let raw = serde_json::json!({"users": [{"user_ID": 1, "user_Name": "ana", "email": "a@x.io", "role": "customer"}]});
    let envelope: UsersEnvelope = serde_json::from_value(raw).unwrap();
    assert_eq!(envelope.users[0].name, "ana");
    assert_eq!(envelope.users[0].role, Role::Regular("customer".to_owned()));
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn request_bodies_use_api_field_names() {
    let add = AddToCartRequest { game_id: "7".to_owned(), quantity: 1 };
    assert_eq!(serde_json::to_value(&add).unwrap(), serde_json::json!({"game_ID": "7", "quantity": 1}));

    let stock = InventoryUpdateRequest { stock_quantity: 4 };
    assert_eq!(serde_json::to_value(&stock).unwrap(), serde_json::json!({"stockQuantity": 4}));

    let status = StatusUpdateRequest { status: OrderStatus::Completed };
    assert_eq!(serde_json::to_value(&status).unwrap(), serde_json::json!({"status": "Completed"}));
}
