use allotment::normalize::{FieldKind, Value, normalize_number, normalize_text};

#[test]
fn thousands_separators_are_removed() {
    assert_eq!(normalize_number(Some("1,234")), Some(1234.0));
    assert_eq!(normalize_number(Some("12,345,678.25")), Some(12345678.25));
    assert_eq!(normalize_number(Some(" 42 ")), Some(42.0));
    assert_eq!(normalize_number(Some("-3.5")), Some(-3.5));
}

#[test]
fn unparseable_numbers_are_null_not_zero() {
    assert_eq!(normalize_number(Some("")), None);
    assert_eq!(normalize_number(None), None);
    assert_eq!(normalize_number(Some("abc")), None);
    assert_eq!(normalize_number(Some("   ")), None);
    assert_eq!(normalize_number(Some(",")), None);
    assert_eq!(normalize_number(Some("12 kg")), None);
    // NaN and infinities are missing values, not numbers
    assert_eq!(normalize_number(Some("nan")), None);
    assert_eq!(normalize_number(Some("inf")), None);
}

#[test]
fn text_is_kept_verbatim() {
    assert_eq!(normalize_text(Some("vn011 ")), Some("vn011 ".to_string()));
    assert_eq!(normalize_text(Some("  ")), Some("  ".to_string()));
    assert_eq!(normalize_text(Some("")), None);
    assert_eq!(normalize_text(None), None);
}

#[test]
fn values_are_tagged_once() {
    assert_eq!(Value::normalize(FieldKind::Number, Some("2,500")), Value::Number(2500.0));
    assert_eq!(Value::normalize(FieldKind::Number, Some("n.a.")), Value::Null);
    assert_eq!(Value::normalize(FieldKind::Text, Some("1,234")), Value::Text("1,234".to_string()));
    assert!(Value::normalize(FieldKind::Text, None).is_null());
    assert_eq!(Value::Text("7,000".to_string()).into_number(), Some(7000.0));
    assert_eq!(Value::Number(3.0).into_text(), Some("3".to_string()));
}

#[test]
fn values_serialize_as_plain_json() {
    let values = vec![Value::Text("SGN".to_string()), Value::Number(1.5), Value::Null];
    assert_eq!(serde_json::to_string(&values).unwrap(), r#"["SGN",1.5,null]"#);
}
