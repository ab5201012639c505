use restaurant_backend::infra::config;
use restaurant_backend::transport;
use restaurant_backend::{DocumentService, SchemaRegistry};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Schema Registry Initialization ---
    println!("> Initializing SchemaRegistry...");
    let schema_registry = Arc::new(SchemaRegistry::with_defaults());

    // --- Persistence Gateway Initialization ---
    // Deliberately non-fatal: liveness endpoints must work without a database.
    println!("> Initializing DocumentService...");
    let document_service = Arc::new(DocumentService::from_env().await);
    let status = document_service.status().await;
    if status.connected {
        println!(
            "> DocumentService connected to '{}'.",
            status.database_name.as_deref().unwrap_or("?")
        );
    } else if let Some(init_error) = &status.init_error {
        eprintln!("> DocumentService degraded (init error: {}).", init_error);
    } else {
        println!("> DocumentService not configured (set DATABASE_URL and DATABASE_NAME); serving without persistence.");
    }

    let app_state = transport::http::AppState {
        document_service,
        schema_registry,
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let port = config::port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    println!("> API server listening on http://0.0.0.0:{}", port);
    println!("> Swagger UI available at http://localhost:{}/swagger-ui", port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C).");
        }
    }

    Ok(())
}
