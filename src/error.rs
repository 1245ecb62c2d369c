use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Route error: {0}")]
    Route(String),
    #[error("Request body error: {0}")]
    RequestBody(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            ServerError::Configuration(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {err}"),
            ),
            ServerError::Route(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Route error: {err}"),
            ),
            ServerError::RequestBody(err) => (
                StatusCode::BAD_REQUEST,
                format!("Request body error: {err}"),
            ),
        };
        (status, Json(error_message)).into_response()
    }
}

impl From<axum::Error> for ServerError {
    fn from(err: axum::Error) -> Self {
        ServerError::RequestBody(err.to_string())
    }
}
