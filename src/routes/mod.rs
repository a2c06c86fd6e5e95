pub mod contract_routes;
pub mod ride_routes;
pub mod vehicle_routes;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/contracts", contract_routes::create_contract_router())
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/ride", ride_routes::create_ride_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "environment": state.config.environment,
        "height": state.ledger.current_height(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
