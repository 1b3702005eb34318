use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use serde_json::json;
use vpn_service_client::application::client::VpnServiceClient;
use vpn_service_client::config::Config;
use vpn_service_client::error::AppError;

fn client_for(url: &str) -> VpnServiceClient {
    VpnServiceClient::new(Config::with_base_url(url))
}

#[tokio::test]
async fn create_then_fetch_config_round_trip() {
    let mut server = Server::new_async().await;

    let created_user = json!({
        "id": 7,
        "username": "alice",
        "uuid": "0aa6cace-29e2-4cf3-8f3a-4f4b2a1f17bd",
        "secret": "",
        "is_active": true,
        "expires_at": "2026-09-04T10:00:00Z",
        "traffic_limit": 10737418240i64,
        "traffic_used": 0,
        "created_at": "2026-08-05T10:00:00Z",
        "updated_at": "2026-08-05T10:00:00Z"
    });
    let create_mock = server
        .mock("POST", "/api/users")
        .match_body(Matcher::PartialJson(json!({
            "username": "alice",
            "password": "s3cret"
        })))
        .with_status(201)
        .with_header("Content-Type", "application/json")
        .with_body(json!({"success": true, "data": created_user}).to_string())
        .create_async()
        .await;

    let bundle = json!({
        "username": "alice",
        "uuid": "0aa6cace-29e2-4cf3-8f3a-4f4b2a1f17bd",
        "server_ip": "198.51.100.7",
        "server_port": 443,
        "json": "{\"protocol\":\"vless\"}",
        "uri": "vless://0aa6cace-29e2-4cf3-8f3a-4f4b2a1f17bd@198.51.100.7:443?type=tcp#alice",
        "expires_at": "2026-09-04T10:00:00Z",
        "traffic_limit": 10737418240i64,
        "traffic_used": 0,
        "is_active": true
    });
    let config_mock = server
        .mock("GET", "/api/users/7/config")
        .with_header("Content-Type", "application/json")
        .with_body(json!({"success": true, "data": bundle.clone()}).to_string())
        .create_async()
        .await;

    let client = client_for(&server.url());

    let created = client
        .create_user("alice", "s3cret", Some(10_737_418_240), Some(30))
        .await
        .unwrap();
    assert!(created.is_success());

    let user = created.into_data().unwrap();
    let config = client.get_user_config(user.id).await.unwrap();

    // The mocked bundle must come back unchanged
    assert_json_eq!(serde_json::to_value(config.into_data().unwrap()).unwrap(), bundle);

    create_mock.assert_async().await;
    config_mock.assert_async().await;
}

#[tokio::test]
async fn delete_user_is_true_only_on_no_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/users/7")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server.url());
    assert!(client.delete_user(7).await.unwrap());
    mock.assert_async().await;

    let not_found = server
        .mock("DELETE", "/api/users/8")
        .with_status(404)
        .with_body(r#"{"success":false,"error":"User not found","code":404}"#)
        .create_async()
        .await;

    assert!(!client.delete_user(8).await.unwrap());
    not_found.assert_async().await;
}

#[tokio::test]
async fn list_users_forwards_the_active_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/users")
        .match_query(Matcher::UrlEncoded("active".into(), "true".into()))
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"data":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let envelope = client.list_users(true).await.unwrap();
    assert!(envelope.into_data().unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn server_side_failure_is_returned_as_an_envelope() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/users/99")
        .with_status(404)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":false,"error":"User not found","code":404}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let envelope = client.get_user(99).await.unwrap();

    assert!(!envelope.is_success());
    assert_eq!(envelope.error.as_deref(), Some("User not found"));
    assert_eq!(envelope.code, Some(404));
}

#[tokio::test]
async fn connection_failure_is_an_error_not_an_empty_result() {
    // Nothing listens on port 1
    let client = client_for("http://127.0.0.1:1");

    match client.health_check().await {
        Err(AppError::Network(_)) => (),
        other => panic!("Expected Network error, got {other:?}"),
    }
}
