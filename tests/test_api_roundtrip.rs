//! End-to-end tests over the in-memory store:
//! write-then-read round-trips, validation enforcement, and limit handling,
//! all through the real router and HTTP stack.

use restaurant_backend::{transport, DocumentService, MemoryStore, SchemaRegistry};
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_server(service: DocumentService) -> String {
    let state = transport::http::AppState {
        document_service: Arc::new(service),
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

fn memory_service() -> DocumentService {
    DocumentService::with_store(Arc::new(MemoryStore::new()), "testdb")
}

#[tokio::test]
async fn dish_post_then_get_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(memory_service()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/menu", base_url))
        .json(&json!({
            "name": "Butter Chicken",
            "price": 12.5,
            "category": "Curry"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await?;
    let id = body["id"].as_str().expect("id is a string").to_string();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(body["message"], "Dish added");

    let response = client.get(format!("{}/api/menu", base_url)).send().await?;
    assert_eq!(response.status(), 200);
    let dishes: Vec<Value> = response.json().await?;
    assert_eq!(dishes.len(), 1);

    let dish = &dishes[0];
    assert_eq!(dish["_id"].as_str().expect("_id is a string"), id);
    assert_eq!(dish["name"], "Butter Chicken");
    assert_eq!(dish["price"], 12.5);
    assert_eq!(dish["category"], "Curry");
    // Omitted optional fields: declared default applied, others null.
    assert_eq!(dish["vegetarian"], false);
    assert_eq!(dish["description"], Value::Null);
    // Timestamps are stamped at insert and serialized as strings.
    let created_at = dish["created_at"].as_str().expect("created_at present");
    assert_eq!(dish["updated_at"].as_str().expect("updated_at present"), created_at);

    Ok(())
}

#[tokio::test]
async fn dish_validation_rejects_with_per_field_reasons() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(memory_service()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/menu", base_url))
        .json(&json!({ "price": -2, "spicy_level": 9 }))
        .send()
        .await?;
    assert_eq!(response.status(), 422);
    let body: Value = response.json().await?;
    let detail = body["detail"].as_array().expect("detail array");
    let fields: Vec<&str> = detail.iter().map(|v| v["field"].as_str().unwrap()).collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"price"));
    assert!(fields.contains(&"category"));
    assert!(fields.contains(&"spicy_level"));

    // Nothing was persisted.
    let dishes: Vec<Value> = client
        .get(format!("{}/api/menu", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert!(dishes.is_empty());

    Ok(())
}

#[tokio::test]
async fn reservation_party_size_bounds_enforced() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(memory_service()).await;
    let client = reqwest::Client::new();

    let reservation = |party_size: i64| {
        json!({
            "name": "Asha",
            "phone": "+1-555-0100",
            "party_size": party_size,
            "date": "2026-01-15",
            "time": "19:30"
        })
    };

    for bad in [0, 21] {
        let response = client
            .post(format!("{}/api/reservations", base_url))
            .json(&reservation(bad))
            .send()
            .await?;
        assert_eq!(response.status(), 422, "party_size {} must be rejected", bad);
        let body: Value = response.json().await?;
        assert_eq!(body["detail"][0]["field"], "party_size");
    }

    let response = client
        .post(format!("{}/api/reservations", base_url))
        .json(&reservation(4))
        .send()
        .await?;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Reservation created");

    Ok(())
}

#[tokio::test]
async fn reservation_listing_honors_limit() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(memory_service()).await;
    let client = reqwest::Client::new();

    // More than the default page size, so the default limit is observable.
    for i in 0..55 {
        let response = client
            .post(format!("{}/api/reservations", base_url))
            .json(&json!({
                "name": format!("Guest {}", i),
                "phone": "+1-555-0100",
                "party_size": 2,
                "date": "2026-02-01",
                "time": "18:00"
            }))
            .send()
            .await?;
        assert_eq!(response.status(), 201);
    }

    // No limit parameter: truncated to the default of 50.
    let defaulted: Vec<Value> = client
        .get(format!("{}/api/reservations", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(defaulted.len(), 50);
    for doc in &defaulted {
        assert!(doc["_id"].is_string(), "_id must always be a string");
    }

    let limited: Vec<Value> = client
        .get(format!("{}/api/reservations?limit=3", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(limited.len(), 3);

    // limit=0 means "no limit".
    let unlimited: Vec<Value> = client
        .get(format!("{}/api/reservations?limit=0", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(unlimited.len(), 55);

    Ok(())
}

#[tokio::test]
async fn malformed_json_body_is_a_422() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(memory_service()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/menu", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(response.status(), 422);
    let body: Value = response.json().await?;
    assert!(body["detail"].as_str().unwrap().contains("Invalid JSON body"));

    Ok(())
}
