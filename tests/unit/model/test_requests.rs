use assert_json_diff::assert_json_include;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use vpn_service_client::application::models::user::{
    CreateUserRequest, UpdateUserRequest, expiry_from_days,
};

fn assert_expiry_close_to(expires_at: &str, days: i64) {
    assert!(expires_at.ends_with('Z'), "expiry not Z-suffixed: {expires_at}");
    let parsed = DateTime::parse_from_rfc3339(expires_at)
        .unwrap()
        .with_timezone(&Utc);
    let expected = Utc::now() + Duration::days(days);
    let diff = (expected - parsed).num_seconds().abs();
    assert!(diff <= 5, "expiry off by {diff} seconds for {days} days");
}

#[test]
fn expiry_is_utc_now_plus_days_with_z_suffix() {
    let expires = expiry_from_days(30);
    assert_expiry_close_to(&expires, 30);
}

#[test]
fn expiry_holds_for_short_and_long_lifetimes() {
    for days in [1, 7, 365] {
        assert_expiry_close_to(&expiry_from_days(days), days);
    }
}

#[test]
fn create_request_carries_all_fields() {
    let request = CreateUserRequest::with_days("alice", "s3cret", 1024, 30);
    let value = serde_json::to_value(&request).unwrap();

    assert_json_include!(
        actual: value.clone(),
        expected: json!({
            "username": "alice",
            "password": "s3cret",
            "traffic_limit": 1024,
        })
    );
    assert_expiry_close_to(value["expires_at"].as_str().unwrap(), 30);
}

#[test]
fn update_request_skips_unset_fields() {
    let update = UpdateUserRequest {
        traffic_limit: Some(2048),
        ..Default::default()
    };
    let value = serde_json::to_value(&update).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert_eq!(object["traffic_limit"], json!(2048));
}

#[test]
fn empty_update_serializes_to_empty_object() {
    let update = UpdateUserRequest::default();
    assert!(update.is_empty());
    assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
}

#[test]
fn full_update_carries_every_field() {
    let update = UpdateUserRequest {
        username: Some("bob".to_string()),
        password: Some("pw".to_string()),
        traffic_limit: Some(0),
        expires_at: Some(Utc::now() + Duration::days(7)),
        is_active: Some(false),
    };
    assert!(!update.is_empty());

    let value = serde_json::to_value(&update).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 5);
    assert_eq!(object["is_active"], json!(false));
}
