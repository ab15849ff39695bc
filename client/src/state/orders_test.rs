use super::*;

fn order(id: &str, placed_at: Option<&str>) -> Order {
    Order {
        id: id.to_owned(),
        user_id: None,
        user_name: None,
        items: vec![
            OrderItem {
                game_id: "1".to_owned(),
                title: "A".to_owned(),
                image_url: None,
                quantity: 2,
                price: Money::from_cents(1000),
            },
            OrderItem {
                game_id: "2".to_owned(),
                title: "B".to_owned(),
                image_url: None,
                quantity: 1,
                price: Money::from_cents(550),
            },
        ],
        status: OrderStatus::Pending,
        payment_method: None,
        payment_status: None,
        total: Money::from_cents(2550),
        placed_at: placed_at.map(str::to_owned),
    }
}

#[test]
fn badge_class_per_status() {
    assert!(status_badge_class(&OrderStatus::Completed).ends_with("--completed"));
    assert!(status_badge_class(&OrderStatus::Cancelled).ends_with("--cancelled"));
    assert!(status_badge_class(&OrderStatus::Pending).ends_with("--pending"));
    assert_eq!(status_badge_class(&OrderStatus::Other("Held".to_owned())), "status-badge");
}

#[test]
fn item_count_and_line_totals() {
    let order = order("1", None);
    assert_eq!(order.item_count(), 3);
    assert_eq!(order.items[0].line_total(), Money::from_cents(2000));
    let sum: Money = order.items.iter().map(OrderItem::line_total).sum();
    assert_eq!(sum, order.total);
}

#[test]
fn payment_summary_combinations() {
    let mut order = order("1", None);
    assert_eq!(
        order.payment_summary(),
        PaymentSummary { method: PAYMENT_NOT_PROVIDED, status: PAYMENT_NOT_PROVIDED }
    );
    order.payment_method = Some("card".to_owned());
    order.payment_status = Some(String::new());
    assert_eq!(order.payment_summary(), PaymentSummary { method: "card", status: "Not provided" });
    order.payment_status = Some("Paid".to_owned());
    assert_eq!(order.payment_summary(), PaymentSummary { method: "card", status: "Paid" });
}
