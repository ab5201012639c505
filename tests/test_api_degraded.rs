//! Behavior with an uninitialized persistence gateway: read paths degrade to
//! empty lists, write paths answer 503 with the retained init error, and the
//! liveness/diagnostics endpoints keep working.

use restaurant_backend::{transport, DocumentService, SchemaRegistry};
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_degraded_server(init_error: Option<&str>) -> String {
    let state = transport::http::AppState {
        document_service: Arc::new(DocumentService::unavailable(
            init_error.map(|s| s.to_string()),
        )),
        schema_registry: Arc::new(SchemaRegistry::with_defaults()),
    };
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn read_paths_return_empty_lists_not_errors() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_degraded_server(Some("DNS lookup failed")).await;
    let client = reqwest::Client::new();

    for path in ["/api/menu", "/api/reservations"] {
        let response = client.get(format!("{}{}", base_url, path)).send().await?;
        assert_eq!(response.status(), 200, "{} must not error", path);
        let body: Vec<Value> = response.json().await?;
        assert!(body.is_empty(), "{} must degrade to []", path);
    }

    Ok(())
}

#[tokio::test]
async fn write_paths_answer_503_with_retained_cause() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_degraded_server(Some("DNS lookup failed")).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/menu", base_url))
        .json(&json!({ "name": "Naan", "price": 3.0, "category": "Breads" }))
        .send()
        .await?;
    assert_eq!(response.status(), 503);
    let body: Value = response.json().await?;
    let detail = body["detail"].as_str().expect("detail string");
    assert!(detail.starts_with("Database unavailable:"));
    assert!(detail.contains("DNS lookup failed"));
    assert!(detail.len() <= "Database unavailable: ".len() + 200);

    let response = client
        .post(format!("{}/api/reservations", base_url))
        .json(&json!({
            "name": "Asha",
            "phone": "+1-555-0100",
            "party_size": 2,
            "date": "2026-02-01",
            "time": "18:00"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), 503);

    Ok(())
}

#[tokio::test]
async fn validation_still_runs_before_the_gateway() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_degraded_server(None).await;
    let client = reqwest::Client::new();

    // An invalid payload is a 422 even though the gateway would 503.
    let response = client
        .post(format!("{}/api/reservations", base_url))
        .json(&json!({ "name": "Asha", "party_size": 40 }))
        .send()
        .await?;
    assert_eq!(response.status(), 422);
    let body: Value = response.json().await?;
    assert!(body["detail"].is_array());

    Ok(())
}

#[tokio::test]
async fn liveness_and_diagnostics_stay_up() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_degraded_server(Some("connection refused")).await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "ok");

    let response = client.get(&base_url).send().await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert!(body["message"].as_str().unwrap().contains("Restaurant API"));

    let response = client.get(format!("{}/test", base_url)).send().await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["backend"], "running");
    assert_eq!(body["connection_status"], "not connected");
    assert!(body["database"].as_str().unwrap().contains("connection refused"));
    assert!(body["collections"].as_array().unwrap().is_empty());

    Ok(())
}
