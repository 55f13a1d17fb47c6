//! Integration tests for FetchClient over the reqwest transport.
//!
//! Uses wiremock for HTTP mocking. Covers JSON round trips, empty success
//! bodies, status mapping and absolute-URL passthrough.

use inventory_data::{FetchClient, FetchError, FetchOptions, ReqwestTransport};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(mock_server: &MockServer) -> FetchClient {
    FetchClient::new(ReqwestTransport::new()).with_base_url(mock_server.uri())
}

#[tokio::test]
async fn test_list_products() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "p1", "sku": "A1", "name": "Widget", "price": 9.99, "stock": 10}
        ])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let body = client
        .fetch_json("/products", FetchOptions::get())
        .await
        .expect("fetch failed")
        .expect("expected a JSON body");

    assert_eq!(body[0]["sku"], "A1");
    assert_eq!(body[0]["price"], 9.99);
}

#[tokio::test]
async fn test_create_sends_json_body() {
    let mock_server = MockServer::start().await;
    let payload = json!({"name": "Acme", "contact": "ops@acme.test"});

    Mock::given(method("POST"))
        .and(path("/supplies"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "s1", "name": "Acme"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let created = client
        .fetch_json("/supplies", FetchOptions::post(&payload).unwrap())
        .await
        .expect("create failed");

    assert_eq!(created, Some(json!({"_id": "s1", "name": "Acme"})));
}

#[tokio::test]
async fn test_delete_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/orders/o1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .fetch_json("/orders/o1", FetchOptions::delete())
        .await
        .expect("delete failed");

    assert!(result.is_none(), "expected None for 204");
}

#[tokio::test]
async fn test_non_json_success_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("updated"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .fetch_json("/products/p1", FetchOptions::put(&json!({})).unwrap())
        .await
        .expect("update failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_not_found_carries_status_and_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Cannot GET /orders/missing"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .fetch_json("/orders/missing", FetchOptions::get())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err,
        FetchError::HttpError {
            status: 404,
            message: "Cannot GET /orders/missing".to_string(),
        }
    );
}

#[tokio::test]
async fn test_server_error_is_not_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("content-type", "application/json")
                .set_body_string("{truncated"),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .fetch_json("/products", FetchOptions::get())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::HttpError { status: 500, .. }));
}

#[tokio::test]
async fn test_absolute_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = FetchClient::new(ReqwestTransport::new()).with_base_url("http://127.0.0.1:1");
    let url = format!("{}/health", mock_server.uri());
    let body = client.fetch_json(&url, FetchOptions::get()).await.unwrap();

    assert_eq!(body, Some(json!({"ok": true})));
}

#[tokio::test]
async fn test_connection_failure_is_request_error() {
    let client = FetchClient::new(ReqwestTransport::new()).with_base_url("http://127.0.0.1:1");
    let err = client
        .fetch_json("/products", FetchOptions::get())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::RequestError(_)));
}
