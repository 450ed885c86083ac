use super::*;

#[test]
fn test_number_accessor_states() {
    let result = CategoryResult::new()
        .with("response_time", 300.0)
        .with("status", "ok")
        .with("page_size", Value::Null);

    assert_eq!(result.number("response_time"), Ok(300.0));
    assert_eq!(
        result.number("status"),
        Err(UnavailableReason::MalformedMetric("status"))
    );
    assert_eq!(
        result.number("page_size"),
        Err(UnavailableReason::MissingMetric("page_size"))
    );
    assert_eq!(result.optional_number("page_size"), Ok(None));
}

#[test]
fn test_non_finite_number_is_not_a_value() {
    // serde_json stores non-finite floats as null
    let result = CategoryResult::new().with("response_time", f64::NAN);
    assert_eq!(
        result.number("response_time"),
        Err(UnavailableReason::MissingMetric("response_time"))
    );
}

#[test]
fn test_flag_accessor() {
    let result = CategoryResult::new()
        .with("ssl_valid", true)
        .with("has_ssl", 1);
    assert_eq!(result.flag("ssl_valid"), Ok(true));
    assert_eq!(
        result.flag("has_ssl"),
        Err(UnavailableReason::MalformedMetric("has_ssl"))
    );
}

#[test]
fn test_absent_category_is_not_collected() {
    let snapshot = AuditSnapshot::new()
        .with_result(Category::Ssl, CategoryResult::new().with("ssl_valid", true))
        .with_unavailable(
            Category::Dns,
            UnavailableReason::CollectorError("timeout".to_string()),
        );

    assert!(snapshot.result(Category::Ssl).is_ok());
    assert_eq!(
        snapshot.result(Category::Performance),
        Err(UnavailableReason::NotCollected)
    );
    assert_eq!(
        snapshot.result(Category::Dns),
        Err(UnavailableReason::CollectorError("timeout".to_string()))
    );
    assert_eq!(snapshot.collected(), vec![Category::Ssl]);
}

#[test]
fn test_list_len() {
    let result = CategoryResult::new().with("a_records", vec!["93.184.216.34"]);
    assert_eq!(result.list_len("a_records"), Some(1));
    assert_eq!(result.list_len("mx_records"), None);
}
