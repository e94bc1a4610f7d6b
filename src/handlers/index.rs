use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::{
    index,
    models::ApiIndex,
    names,
    rejections::{AppError, ResultExt, INDEX_FAILURE_MESSAGE},
    scanner, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::GENERATE_INDEX_URL, get(generate_index))
}

async fn generate_index(State(state): State<AppState>) -> Result<Json<ApiIndex>, AppError> {
    let data_dir = state.data_dir.clone();
    let scan = tokio::task::spawn_blocking(move || scanner::scan_if_present(&data_dir))
        .await
        .reject(INDEX_FAILURE_MESSAGE)?
        .reject(INDEX_FAILURE_MESSAGE)?;

    for skipped in &scan.skipped {
        tracing::warn!("skipped {} which {}", skipped.file_name, skipped.reason);
    }

    Ok(Json(index::build_api_index(
        &scan,
        names::GENERATED_BY_API,
        Utc::now(),
    )))
}
