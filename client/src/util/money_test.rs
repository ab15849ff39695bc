use super::*;

#[test]
fn parse_accepts_whole_and_fractional_amounts() {
    assert_eq!(Money::parse("59.99"), Some(Money::from_cents(5999)));
    assert_eq!(Money::parse("12"), Some(Money::from_cents(1200)));
    assert_eq!(Money::parse("12.5"), Some(Money::from_cents(1250)));
    assert_eq!(Money::parse(".5"), Some(Money::from_cents(50)));
    assert_eq!(Money::parse(" 7.05 "), Some(Money::from_cents(705)));
}

#[test]
fn parse_rounds_third_fractional_digit_half_up() {
    assert_eq!(Money::parse("1.234"), Some(Money::from_cents(123)));
    assert_eq!(Money::parse("1.235"), Some(Money::from_cents(124)));
    assert_eq!(Money::parse("0.995"), Some(Money::from_cents(100)));
}

#[test]
fn parse_handles_negative_amounts() {
    assert_eq!(Money::parse("-3.5"), Some(Money::from_cents(-350)));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(Money::parse(""), None);
    assert_eq!(Money::parse("-"), None);
    assert_eq!(Money::parse("abc"), None);
    assert_eq!(Money::parse("1.2.3"), None);
    assert_eq!(Money::parse("$5"), None);
}

#[test]
fn from_f64_rounds_to_nearest_cent() {
    assert_eq!(Money::from_f64(19.99), Some(Money::from_cents(1999)));
    assert_eq!(Money::from_f64(0.1 + 0.2), Some(Money::from_cents(30)));
    assert_eq!(Money::from_f64(f64::NAN), None);
    assert_eq!(Money::from_f64(f64::INFINITY), None);
}

#[test]
fn display_formats_dollars_and_cents() {
    assert_eq!(Money::from_cents(5999).to_string(), "$59.99");
    assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    assert_eq!(Money::from_cents(-350).to_string(), "-$3.50");
    assert_eq!(Money::ZERO.to_string(), "$0.00");
}

#[test]
fn times_and_sum_are_exact() {
    let lines = [Money::from_cents(1999).times(3), Money::from_cents(1).times(7)];
    assert_eq!(lines.into_iter().sum::<Money>(), Money::from_cents(6004));
}

#[test]
fn deserializes_from_number_string_and_null() {
    let from_int: Money = serde_json::from_str("12").unwrap();
    let from_float: Money = serde_json::from_str("59.99").unwrap();
    let from_string: Money = serde_json::from_str("\"59.99\"").unwrap();
    let from_null: Money = serde_json::from_str("null").unwrap();
    assert_eq!(from_int, Money::from_cents(1200));
    assert_eq!(from_float, Money::from_cents(5999));
    assert_eq!(from_string, Money::from_cents(5999));
    assert_eq!(from_null, Money::ZERO);
}

#[test]
fn deserialize_rejects_non_amounts() {
    assert!(serde_json::from_str::<Money>("\"free\"").is_err());
    assert!(serde_json::from_str::<Money>("true").is_err());
}
