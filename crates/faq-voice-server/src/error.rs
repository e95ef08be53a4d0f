use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use faq_voice_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("Missing required fields: brandVoice, faq, and question are required")]
    MissingFields,

    #[error("brandVoice must be a JSON object")]
    InvalidBrandVoice,

    /// Body is not JSON, or was sent without a JSON content type.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// Body is JSON but a field has the wrong type.
    #[error("Failed to generate answer")]
    MalformedRequest(String),

    #[error("Failed to generate answer")]
    Generation(#[from] CoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::InvalidBrandVoice | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Config(_) | Self::MalformedRequest(_) | Self::Generation(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::MalformedRequest(e.body_text()),
            other => Self::InvalidBody(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(AppError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidBrandVoice.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generation_failures_hide_details() {
        let err = AppError::from(CoreError::BrandVoice("bad style_rules".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to generate answer");
    }

    #[test]
    fn body_errors_split_by_kind() {
        let malformed = AppError::MalformedRequest("faq: invalid type".to_string());
        assert_eq!(malformed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(malformed.to_string(), "Failed to generate answer");

        let invalid = AppError::InvalidBody("expected value".to_string());
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert!(invalid.to_string().starts_with("Invalid JSON body"));
    }
}
