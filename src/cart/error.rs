//! Cart service errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("CSRF verification failed")]
    CsrfFailed,

    #[error("Invalid request")]
    InvalidRequest,

    #[error("Product not found")]
    ProductNotFound,
}

impl CartError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::CsrfFailed => StatusCode::FORBIDDEN,
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::ProductNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
