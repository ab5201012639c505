//! Liveness and diagnostics endpoints (no persistence involved in the
//! liveness paths; `/test` introspects the gateway without ever failing).

use crate::infra::config;
use crate::transport::http::handlers::common::truncate_chars;
use crate::transport::http::types::{AppState, DiagnosticsResponse, HealthResponse, MessageResponse};
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome payload", body = MessageResponse))
)]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the North Indian Restaurant API".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/hello",
    responses((status = 200, description = "Hello payload", body = MessageResponse))
)]
pub async fn hello_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

/// Reports the current connection state and up to 10 collection names.
/// Purely diagnostic: always answers 200, with errors folded into the body.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Connection diagnostics", body = DiagnosticsResponse))
)]
pub async fn test_database_handler(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let status = state.document_service.status().await;

    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: if config::database_url().is_some() { "set" } else { "not set" }.to_string(),
        database_name: if config::database_name().is_some() { "set" } else { "not set" }.to_string(),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if status.connected {
        response.connection_status = "connected".to_string();
        match state.document_service.list_collections(10).await {
            Ok(names) => {
                response.collections = names;
                response.database = "connected and working".to_string();
            }
            Err(e) => {
                response.database = format!(
                    "connected but error: {}",
                    truncate_chars(&format!("{:#}", e), 80)
                );
            }
        }
    } else if status.ready {
        response.database = "configured but unreachable".to_string();
    } else if let Some(init_error) = status.init_error {
        response.database = format!("error: {}", truncate_chars(&init_error, 120));
    }

    Json(response)
}
