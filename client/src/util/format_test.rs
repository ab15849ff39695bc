use super::*;

#[test]
fn absolute_image_urls_are_kept() {
    assert_eq!(
        resolve_image_url(Some("https://cdn.example.com/a.png")).as_deref(),
        Some("https://cdn.example.com/a.png")
    );
    assert_eq!(resolve_image_url(Some("//cdn.example.com/a.png")).as_deref(), Some("//cdn.example.com/a.png"));
}

#[test]
fn relative_image_paths_go_through_media_prefix() {
    assert_eq!(resolve_image_url(Some("uploads/a.png")).as_deref(), Some("/media/uploads/a.png"));
    assert_eq!(resolve_image_url(Some("/uploads/a.png")).as_deref(), Some("/media/uploads/a.png"));
}

#[test]
fn missing_or_blank_image_is_none() {
    assert_eq!(resolve_image_url(None), None);
    assert_eq!(resolve_image_url(Some("  ")), None);
}

#[test]
fn rfc3339_timestamp_is_normalized_to_utc() {
    assert_eq!(format_timestamp("2024-05-01T10:30:00Z"), "2024-05-01 10:30");
    assert_eq!(format_timestamp("2024-05-01T12:30:00+02:00"), "2024-05-01 10:30");
}

#[test]
fn sql_timestamp_is_accepted() {
    assert_eq!(format_timestamp("2024-05-01 10:30:45"), "2024-05-01 10:30");
    assert_eq!(format_timestamp("2024-05-01T10:30:45.123"), "2024-05-01 10:30");
}

#[test]
fn bare_date_and_garbage() {
    assert_eq!(format_timestamp("2024-05-01"), "2024-05-01");
    assert_eq!(format_timestamp("yesterday"), "yesterday");
}

#[test]
fn item_count_label_pluralizes() {
    assert_eq!(item_count_label(1), "1 item");
    assert_eq!(item_count_label(0), "0 items");
    assert_eq!(item_count_label(4), "4 items");
}
