use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::domain::model::InvalidNumber;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Invalid number: {raw}")]
    InvalidNumber { raw: String },

    #[error("Fact API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Fact API returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Fact API returned an empty body")]
    MalformedFact,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Classification task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl ClassifierError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClassifierError::InvalidNumber { .. } => StatusCode::BAD_REQUEST,
            // 抓取錯誤在 NumbersApiClient 內就轉成 fallback，不會走到回應
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<InvalidNumber> for ClassifierError {
    fn from(value: InvalidNumber) -> Self {
        ClassifierError::InvalidNumber { raw: value.number }
    }
}

impl IntoResponse for ClassifierError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // 400 回應必須原樣回傳收到的字串
            ClassifierError::InvalidNumber { raw } => {
                (status, Json(InvalidNumber::new(raw))).into_response()
            }
            other => {
                tracing::error!("❌ Request failed: {}", other);
                (
                    status,
                    Json(serde_json::json!({ "error": true, "message": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
