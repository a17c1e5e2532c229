mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use common::{app_with, sample_rows, MemoryRepository};
use vehicle_inventory::repositories::vehicle_query::FilterValue;

async fn get(repository: Arc<MemoryRepository>, uri: &str) -> (StatusCode, Value) {
    let app = app_with(repository);

    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn stock_numbers(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["STOCK_NUMBER"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_statuses_are_distinct_sorted_and_non_null() {
    let mut rows = sample_rows();
    rows.push(common::vehicle(6, "C3", Some(3)));
    let (status, body) = get(Arc::new(MemoryRepository::new(rows)), "/api/statuses").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "StatusPrefix1": 0 }, { "StatusPrefix1": 3 }, { "StatusPrefix1": 6 }])
    );
}

#[tokio::test]
async fn test_statuses_empty_table() {
    let (status, body) = get(Arc::new(MemoryRepository::new(Vec::new())), "/api/statuses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_vehicles_without_filters_returns_every_row() {
    let repository = Arc::new(MemoryRepository::new(sample_rows()));
    let (status, body) = get(repository.clone(), "/api/vehicles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stock_numbers(&body), vec!["A1001", "A1002", "B200", "Z0", "N1"]);
    assert!(repository.queries.lock().unwrap()[0].predicates().is_empty());
}

#[tokio::test]
async fn test_vehicles_stock_number_and_status_prefix() {
    let (status, body) = get(
        Arc::new(MemoryRepository::new(sample_rows())),
        "/api/vehicles?stockNumber=A100&statusPrefix=6",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stock_numbers(&body), vec!["A1001"]);
}

#[tokio::test]
async fn test_vehicles_stock_number_is_case_insensitive_substring() {
    let (_, body) = get(
        Arc::new(MemoryRepository::new(sample_rows())),
        "/api/vehicles?stockNumber=a10",
    )
    .await;
    assert_eq!(stock_numbers(&body), vec!["A1001", "A1002"]);
}

#[tokio::test]
async fn test_vehicles_vin_filter() {
    let (_, body) = get(
        Arc::new(MemoryRepository::new(sample_rows())),
        "/api/vehicles?vin=00000003",
    )
    .await;
    assert_eq!(stock_numbers(&body), vec!["B200"]);
}

#[tokio::test]
async fn test_vehicles_status_prefix_is_exact() {
    let (_, body) = get(
        Arc::new(MemoryRepository::new(sample_rows())),
        "/api/vehicles?statusPrefix=0",
    )
    .await;
    assert_eq!(stock_numbers(&body), vec!["Z0"]);
}

#[tokio::test]
async fn test_empty_status_prefix_means_no_filter() {
    let repository = Arc::new(MemoryRepository::new(sample_rows()));
    let (status, body) = get(
        repository.clone(),
        "/api/vehicles?stockNumber=&vin=&statusPrefix=",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Z0 (prefix 0) and N1 (no prefix) are both still there
    assert_eq!(stock_numbers(&body).len(), 5);
    assert!(repository.queries.lock().unwrap()[0].predicates().is_empty());
}

#[tokio::test]
async fn test_non_integer_status_prefix_is_rejected() {
    let repository = Arc::new(MemoryRepository::new(sample_rows()));
    let (status, body) = get(repository.clone(), "/api/vehicles?statusPrefix=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("statusPrefix"));
    assert!(repository.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_injection_text_is_bound_not_interpolated() {
    let repository = Arc::new(MemoryRepository::new(sample_rows()));
    let (status, body) = get(
        repository.clone(),
        "/api/vehicles?stockNumber=%27%3B%20DROP%20TABLE%20UsedInventory%3B%20--",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let queries = repository.queries.lock().unwrap();
    assert!(!queries[0].sql().contains("DROP"));
    assert_eq!(
        queries[0].bound_values(),
        vec![FilterValue::Text("%'; DROP TABLE UsedInventory; --%".to_string())]
    );
}

#[tokio::test]
async fn test_list_returns_projection_only() {
    let (_, body) = get(Arc::new(MemoryRepository::new(sample_rows())), "/api/vehicles").await;
    let first = body[0].as_object().unwrap();
    assert_eq!(first.len(), 9);
    for key in [
        "ID",
        "STOCK_NUMBER",
        "STATUS",
        "MAKE",
        "MODEL",
        "YEAR",
        "NEW",
        "ListPrice",
        "StatusPrefix1",
    ] {
        assert!(first.contains_key(key), "missing {}", key);
    }
    assert!(!first.contains_key("VIN"));
}

#[tokio::test]
async fn test_get_vehicle_returns_full_record() {
    let repository = Arc::new(MemoryRepository::new(sample_rows()));
    let (status, body) = get(repository, "/api/vehicles/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ID"], 3);
    assert_eq!(body["STOCK_NUMBER"], "B200");
    assert_eq!(body["VIN"], "1HGCM826300000003");
    assert_eq!(body["ODOMETER"], 42000);
    assert_eq!(body["COLOR"], "Silver");
    assert_eq!(body["ListPrice"], json!(18999.0));
    assert_eq!(body.as_object().unwrap().len(), 15);
}

#[tokio::test]
async fn test_get_missing_vehicle_is_404() {
    let repository = Arc::new(MemoryRepository::new(sample_rows()));
    let (status, body) = get(repository, "/api/vehicles/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Vehicle not found" }));
}

#[tokio::test]
async fn test_get_vehicle_with_malformed_id() {
    let repository = Arc::new(MemoryRepository::new(sample_rows()));
    let (status, body) = get(repository, "/api/vehicles/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_repeated_filter_key_is_json_400() {
    let repository = Arc::new(MemoryRepository::new(sample_rows()));
    let app = app_with(repository.clone());
    let request = Request::builder()
        .uri("/api/vehicles?statusPrefix=6&statusPrefix=3")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].as_str().unwrap().contains("statusPrefix"));
    assert!(repository.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_data_access_failure_is_500_on_every_route() {
    for uri in ["/api/statuses", "/api/vehicles", "/api/vehicles/1"] {
        let repository = Arc::new(MemoryRepository::failing("connection refused"));
        let (status, body) = get(repository, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert!(body["message"].as_str().unwrap().contains("connection refused"), "{}", uri);
    }
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(Arc::new(MemoryRepository::new(Vec::new())), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(Arc::new(MemoryRepository::failing("down")), "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app_with(Arc::new(MemoryRepository::new(Vec::new())));
    let request = Request::builder()
        .uri("/api/nonexistent")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
