//! Recent server log entries.

use axum::Json;
use axum::extract::Query;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::services::log_buffer;

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub limit: Option<usize>,
}

/// GET /api/logs
pub async fn get_logs(Query(q): Query<LogQuery>) -> Json<Value> {
    let limit = q.limit.unwrap_or(100).clamp(1, log_buffer::MAX_LOG_ENTRIES);
    let logs = log_buffer::recent(limit);
    Json(json!({
        "count": logs.len(),
        "logs": logs,
        "limit": limit,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
