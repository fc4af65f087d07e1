//! Error types for the document generator server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docgen_engine::GenerationError;
use serde::Serialize;
use state_law::UnknownStateError;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error response body
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing_fields: Option<Vec<String>>,
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::Generation(err) => match err {
                GenerationError::AccessDenied { .. } => StatusCode::FORBIDDEN,
                GenerationError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                GenerationError::UnknownState { .. } => StatusCode::NOT_FOUND,
                GenerationError::UnknownDocumentType(_) | GenerationError::NotTemplated(_) => {
                    StatusCode::BAD_REQUEST
                }
            },
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ServerError::Generation(err) => err.code(),
            ServerError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let missing_fields = match &self {
            ServerError::Generation(GenerationError::Validation { missing_fields }) => {
                Some(missing_fields.clone())
            }
            _ => None,
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: self.code().to_string(),
            missing_fields,
        };

        (status, Json(body)).into_response()
    }
}

impl From<UnknownStateError> for ServerError {
    fn from(err: UnknownStateError) -> Self {
        ServerError::Generation(err.into())
    }
}
