pub mod handlers;
pub mod index;
pub mod models;
pub mod names;
pub mod rejections;
pub mod scanner;
pub mod utils;

use std::path::PathBuf;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::rejections::AppError;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(handlers::index::routes())
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
