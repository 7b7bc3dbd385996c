//! Audio dependencies widget:
//!   GET /api/widgets/audio/dependencies – audio tools from the software inventory

use axum::Json;
use axum::extract::State;

use crate::app::SharedState;
use crate::services::audio_dependencies::{AudioDependencies, list_audio_dependencies};

/// GET /api/widgets/audio/dependencies
pub async fn list_dependencies(State(state): State<SharedState>) -> Json<AudioDependencies> {
    Json(list_audio_dependencies(state.inventory()).await)
}
