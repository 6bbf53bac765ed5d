mod common;

use axum::http::StatusCode;
use common::{BackendBehavior, FakeBackend};
use serde_json::json;

#[tokio::test]
async fn test_trigger_success() {
    let backend = FakeBackend::start(BackendBehavior::default()).await;
    let server = common::api_server(common::create_test_state(&backend.base_url));

    let response = server
        .post("/api/trigger")
        .json(&json!({ "secret": "f3b1c9" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Notifications triggered successfully");

    assert_eq!(backend.trigger_calls(), vec![json!({ "secret": "f3b1c9" })]);
}

#[tokio::test]
async fn test_trigger_without_secret_forwards_empty_object() {
    let backend = FakeBackend::start(BackendBehavior::default()).await;
    let server = common::api_server(common::create_test_state(&backend.base_url));

    let response = server.post("/api/trigger").json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(backend.trigger_calls(), vec![json!({})]);
}

#[tokio::test]
async fn test_trigger_backend_error() {
    let backend = FakeBackend::start(BackendBehavior {
        trigger: StatusCode::INTERNAL_SERVER_ERROR,
        ..Default::default()
    })
    .await;
    let server = common::api_server(common::create_test_state(&backend.base_url));

    let response = server
        .post("/api/trigger")
        .json(&json!({ "secret": "f3b1c9" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_trigger_forwards_null_secret() {
    let backend = FakeBackend::start(BackendBehavior::default()).await;
    let server = common::api_server(common::create_test_state(&backend.base_url));

    let response = server
        .post("/api/trigger")
        .json(&json!({ "secret": null }))
        .await;

    response.assert_status_ok();
    assert_eq!(backend.trigger_calls(), vec![json!({ "secret": null })]);
}
