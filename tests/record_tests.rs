use serde_json::json;
use youyaku::{ContentRecord, SummaryError, SummaryOptions};

#[test]
fn test_from_json_maps_framework_shape() {
    let payload = json!({
        "data": {
            "summary": "手動の要約",
            "excerpt": "抜粋テキスト"
        },
        "body": "本文がここに入ります。"
    });

    let record = ContentRecord::from_json(&payload).unwrap();
    assert_eq!(record.summary.as_deref(), Some("手動の要約"));
    assert_eq!(record.excerpt.as_deref(), Some("抜粋テキスト"));
    assert_eq!(record.description, None);
    assert_eq!(record.body.as_deref(), Some("本文がここに入ります。"));
    assert_eq!(record.effective_body_length(), "本文がここに入ります。".chars().count());
}

#[test]
fn test_from_json_tolerates_missing_fields() {
    let record = ContentRecord::from_json(&json!({})).unwrap();
    assert!(record.summary.is_none());
    assert!(record.body.is_none());
    assert_eq!(record.effective_body_length(), 0);
}

#[test]
fn test_from_json_ignores_non_string_fields() {
    let payload = json!({
        "data": { "summary": 42, "description": ["not", "a", "string"] },
        "body": null
    });
    let record = ContentRecord::from_json(&payload).unwrap();
    assert!(record.summary.is_none());
    assert!(record.description.is_none());
    assert!(record.body.is_none());
}

#[test]
fn test_from_json_rejects_non_object_payloads() {
    let err = ContentRecord::from_json(&json!("just a string")).unwrap_err();
    assert!(matches!(err, SummaryError::InvalidRecord(_)));
    assert!(err.to_string().contains("not an object"));
}

#[test]
fn test_explicit_body_length_wins_over_counting() {
    let record = ContentRecord {
        body: Some("十文字ではない本文".to_string()),
        body_length: Some(2500),
        ..ContentRecord::default()
    };
    assert_eq!(record.effective_body_length(), 2500);
}

#[test]
fn test_options_defaults() {
    let options = SummaryOptions::default();
    assert_eq!(options.max_length, 120);
    assert_eq!(options.suffix, "…");
    assert!(options.prefer_manual);
}

#[test]
fn test_options_deserialize_with_partial_fields() {
    // Callers pass sparse option bags; missing keys take the defaults
    let options: SummaryOptions = serde_json::from_value(json!({ "max_length": 60 })).unwrap();
    assert_eq!(options.max_length, 60);
    assert_eq!(options.suffix, "…");
    assert!(options.prefer_manual);
}
