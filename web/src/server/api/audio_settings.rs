//! Audio settings widget:
//!   GET /api/widgets/audio/settings – rendered HTML fragment

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use serde_json::Value;

use crate::app::SharedState;
use crate::services::audio_settings::resolve_settings;

use super::err_json;

/// GET /api/widgets/audio/settings
pub async fn settings_widget(
    State(state): State<SharedState>,
) -> Result<Html<String>, (StatusCode, Json<Value>)> {
    let settings = resolve_settings(state.settings_source()).await;

    let html = state
        .views()
        .render_audio_settings(&settings)
        .map_err(|e| {
            tracing::error!("Failed to render audio settings widget: {e:#}");
            err_json(500, &format!("Failed to render widget: {e}"))
        })?;

    Ok(Html(html))
}
