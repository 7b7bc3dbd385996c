use axum::{Router, http::Uri, routing::get};
use tower_http::cors::CorsLayer;

use super::api;
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        // --- Audio widget ---
        .route("/api/widgets/audio/settings", get(api::audio_settings::settings_widget))
        .route("/api/widgets/audio/dependencies", get(api::audio_dependencies::list_dependencies))
        // --- Logs ---
        .route("/api/logs", get(api::logs::get_logs))
        .fallback(not_found)
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn not_found(uri: Uri) -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({ "error": "Not Found", "path": uri.path() })),
    )
}
