use super::*;

#[test]
fn tabs_have_labels_and_headings() {
    let labels: Vec<&str> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Orders", "Inventory", "Users"]);
    assert_eq!(AdminTab::default(), AdminTab::Orders);
    assert_eq!(AdminTab::Inventory.heading(), "Inventory Management");
}

#[test]
fn admin_data_emptiness() {
    assert!(AdminData::Orders(Vec::new()).is_empty());
    assert!(AdminData::Users(Vec::new()).is_empty());
}

#[test]
fn stock_input_accepts_only_non_negative_integers() {
    assert_eq!(parse_stock_input("12"), Some(12));
    assert_eq!(parse_stock_input(" 0 "), Some(0));
    assert_eq!(parse_stock_input(""), None);
    assert_eq!(parse_stock_input("-1"), None);
    assert_eq!(parse_stock_input("3.5"), None);
    assert_eq!(parse_stock_input("abc"), None);
}

#[test]
fn stock_change_skips_noop() {
    assert_eq!(stock_change(5, "5"), None);
    assert_eq!(stock_change(5, "6"), Some(6));
    assert_eq!(stock_change(5, ""), None);
}

#[test]
fn status_choice_accepts_assignable_values() {
    assert_eq!(parse_status_choice("Completed"), Some(OrderStatus::Completed));
    assert_eq!(parse_status_choice("Shipped"), None);
}

#[test]
fn status_change_skips_noop() {
    assert_eq!(status_change(&OrderStatus::Pending, "Pending"), None);
    assert_eq!(status_change(&OrderStatus::Pending, "Cancelled"), Some(OrderStatus::Cancelled));
}
