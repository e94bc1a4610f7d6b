use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INDEX_FAILURE_MESSAGE: &str = "failed to generate the quiz index";

#[derive(Debug)]
pub enum AppError {
    Internal {
        error: String,
        message: &'static str,
    },
    NotFound,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, body) = match self {
            AppError::Internal { error, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error,
                    message: message.to_string(),
                },
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "not found".to_string(),
                    message: "no such endpoint".to_string(),
                },
            ),
        };

        (code, Json(body)).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the error and turn it into a 500 carrying `message`.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e:#}");
            AppError::Internal {
                error: format!("{e:#}"),
                message,
            }
        })
    }
}
