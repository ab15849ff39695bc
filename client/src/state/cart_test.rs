use super::*;

fn item(game_id: &str, quantity: u32, price_cents: i64) -> CartItem {
    CartItem {
        game_id: game_id.to_owned(),
        title: format!("Game {game_id}"),
        image_url: None,
        quantity,
        price: Money::from_cents(price_cents),
        total_price: Money::from_cents(price_cents * i64::from(quantity)),
    }
}

fn game(stock: u32) -> Game {
    Game {
        id: "7".to_owned(),
        title: "Celeste".to_owned(),
        description: String::new(),
        price: Money::from_cents(1999),
        genre: "Platformer".to_owned(),
        platform: "PC".to_owned(),
        image_url: None,
        stock_quantity: stock,
        release_date: None,
    }
}

// =============================================================
// Cart totals
// =============================================================

#[test]
fn items_total_matches_server_total() {
    let raw = serde_json::json!({
        "items": [
            {"game_ID": 1, "title": "A", "quantity": 3, "price": "19.99", "total_price": "59.97"},
            {"game_ID": 2, "title": "B", "quantity": 1, "price": 0.1, "total_price": 0.1},
            {"game_ID": 3, "title": "C", "quantity": 2, "price": 0.2, "total_price": 0.4}
        ],
        "total": 60.47
    });
    let cart: Cart = serde_json::from_value(raw).unwrap();
    assert_eq!(cart.items_total(), Money::from_cents(6047));
    assert!(cart.total_matches());
}

#[test]
fn mismatched_server_total_is_detected() {
    let cart = Cart { items: vec![item("1", 2, 500)], total: Money::from_cents(999), timestamp: None };
    assert!(!cart.total_matches());
}

#[test]
fn empty_cart_totals_zero() {
    let cart = Cart::default();
    assert!(cart.is_empty());
    assert_eq!(cart.items_total(), Money::ZERO);
    assert!(cart.total_matches());
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn item_count_sums_quantities() {
    let cart = Cart { items: vec![item("1", 2, 100), item("2", 3, 100)], total: Money::from_cents(500), timestamp: None };
    assert_eq!(cart.item_count(), 5);
}

// =============================================================
// Add to cart
// =============================================================

#[test]
fn out_of_stock_game_never_builds_a_request() {
    assert_eq!(prepare_add_to_cart(&game(0), &ActionState::Idle), AddToCartGate::OutOfStock);
}

#[test]
fn in_stock_game_builds_single_quantity_request() {
    let gate = prepare_add_to_cart(&game(4), &ActionState::Idle);
    assert_eq!(gate, AddToCartGate::Ready(AddToCartRequest { game_id: "7".to_owned(), quantity: 1 }));
}

#[test]
fn pending_add_blocks_double_click() {
    assert_eq!(prepare_add_to_cart(&game(4), &ActionState::Pending), AddToCartGate::Busy);
}

#[test]
fn add_success_uses_server_message_or_default() {
    let with_message = classify_add_to_cart(Ok(MessageReply { message: Some("Item added".to_owned()) }));
    let without = classify_add_to_cart(Ok(MessageReply::default()));
    assert_eq!(with_message, AddToCartOutcome::Added("Item added".to_owned()));
    assert_eq!(without, AddToCartOutcome::Added("Added to cart successfully!".to_owned()));
}

#[test]
fn add_unauthorized_redirects_to_login() {
    assert_eq!(classify_add_to_cart(Err(ApiError::Unauthorized)), AddToCartOutcome::RedirectToLogin);
}

#[test]
fn add_stock_refusal_triggers_catalog_redirect() {
    let err = ApiError::Status { status: 400, message: "Game is out of stock".to_owned() };
    assert_eq!(classify_add_to_cart(Err(err)), AddToCartOutcome::OutOfStock("Game is out of stock".to_owned()));
}

#[test]
fn add_other_failure_is_inline() {
    let err = ApiError::Status { status: 500, message: "boom".to_owned() };
    let outcome = classify_add_to_cart(Err(err));
    assert_eq!(outcome, AddToCartOutcome::Failed("boom".to_owned()));
    assert_eq!(outcome.into_action_state(), ActionState::Failed("boom".to_owned()));
}

// =============================================================
// Checkout
// =============================================================

#[test]
fn checkout_success_navigates_to_new_order() {
    let reply = CheckoutReply { order_id: "314".to_owned(), message: None };
    assert_eq!(classify_checkout(Ok(reply)), CheckoutOutcome::Navigate("/orders/314".to_owned()));
}

#[test]
fn checkout_unauthorized_redirects() {
    assert_eq!(classify_checkout(Err(ApiError::Unauthorized)), CheckoutOutcome::RedirectToLogin);
}

#[test]
fn checkout_failure_keeps_message() {
    let err = ApiError::Status { status: 400, message: "Cart is empty".to_owned() };
    assert_eq!(classify_checkout(Err(err)), CheckoutOutcome::Failed("Cart is empty".to_owned()));
}

#[test]
fn checkout_disabled_for_empty_cart_or_pending() {
    let cart = Cart { items: vec![item("1", 1, 100)], total: Money::from_cents(100), timestamp: None };
    assert!(can_checkout(&cart, &ActionState::Idle));
    assert!(!can_checkout(&cart, &ActionState::Pending));
    assert!(!can_checkout(&Cart::default(), &ActionState::Idle));
}
