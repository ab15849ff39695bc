use super::*;

#[test]
fn status_401_is_unauthorized_regardless_of_body() {
    let err = ApiError::from_response(401, r#"{"message": "Please log in"}"#, "Failed to fetch cart");
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn server_message_is_kept_verbatim() {
    let err = ApiError::from_response(500, r#"{"message": "Cart service is down for maintenance."}"#, "fallback");
    assert_eq!(
        err,
        ApiError::Status { status: 500, message: "Cart service is down for maintenance.".to_owned() }
    );
}

#[test]
fn error_field_used_when_message_missing() {
    let err = ApiError::from_response(404, r#"{"error": "Order not found"}"#, "fallback");
    assert_eq!(err.to_string(), "Order not found");
}

#[test]
fn blank_message_falls_through_to_error_field() {
    let err = ApiError::from_response(404, r#"{"message": "", "error": "Order not found"}"#, "fallback");
    assert_eq!(err.to_string(), "Order not found");
}

#[test]
fn json_message_keeps_surrounding_whitespace() {
    let err = ApiError::from_response(400, r#"{"message": "  Quantity must be positive "}"#, "fallback");
    assert_eq!(err.to_string(), "  Quantity must be positive ");
}

#[test]
fn fallback_used_for_empty_or_messageless_body() {
    assert_eq!(ApiError::from_response(500, "", "Failed to fetch orders").to_string(), "Failed to fetch orders");
    assert_eq!(ApiError::from_response(500, r#"{"ok": false}"#, "Failed").to_string(), "Failed");
    assert_eq!(ApiError::from_response(500, r#"{"message": "  "}"#, "Failed").to_string(), "Failed");
}

#[test]
fn short_plain_text_body_is_used() {
    assert_eq!(ApiError::from_response(502, "Bad Gateway", "fallback").to_string(), "Bad Gateway");
}

#[test]
fn html_body_falls_back() {
    let err = ApiError::from_response(502, "<html><body>nginx</body></html>", "Failed to fetch");
    assert_eq!(err.to_string(), "Failed to fetch");
}

#[test]
fn inventory_unavailable_detection() {
    let out = ApiError::Status { status: 400, message: "Game is out of stock".to_owned() };
    let inventory = ApiError::Status { status: 409, message: "Not enough inventory available".to_owned() };
    let other = ApiError::Status { status: 400, message: "Invalid quantity".to_owned() };
    assert!(out.is_inventory_unavailable());
    assert!(inventory.is_inventory_unavailable());
    assert!(!other.is_inventory_unavailable());
    assert!(!ApiError::Network("out of stock".to_owned()).is_inventory_unavailable());
}

#[test]
fn inventory_service_failure_is_not_a_stock_refusal() {
    let outage = ApiError::Status { status: 500, message: "Inventory service error, please retry".to_owned() };
    assert!(!outage.is_inventory_unavailable());
    let short = ApiError::Status { status: 409, message: "Insufficient stock for Halo".to_owned() };
    assert!(short.is_inventory_unavailable());
}

#[test]
fn network_and_decode_display_their_text() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "offline");
    assert_eq!(ApiError::Decode("bad json".to_owned()).to_string(), "bad json");
}
