use axum::Json;
use axum::extract::State;
use axum::response::Html;
use chrono::Local;

use crate::core::error::AppError;
use crate::features::status::dto::HealthDto;
use crate::server::AppState;

pub async fn handle_healthcheck() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_string(),
        timestamp: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    })
}

pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    tokio::fs::read_to_string(state.index_path.as_str())
        .await
        .map(Html)
        .map_err(|err| {
            AppError::internal(format!(
                "failed to read dashboard page {}: {err}",
                state.index_path
            ))
        })
}
