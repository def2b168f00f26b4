use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Errors surfaced by the JSON API.
///
/// Every variant is rendered as `{ "error": <message> }`. Unexpected errors
/// keep their cause for the logs and only expose the fixed `message`.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{message}")]
    Unexpected {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn unexpected(message: &'static str, source: anyhow::Error) -> Self {
        Self::Unexpected { message, source }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(message) => {
                tracing::info!(error = %message, "resource not found");
            }
            Self::Unexpected { message, source } => {
                tracing::error!("{}: {:?}", message, source);
            }
        }

        (
            self.status_code(),
            Json(schema::Error {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
