use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hp_engine::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to load character definition: {0}")]
    Load(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Engine(EngineError::InvalidAmount { .. })
            | ApiError::Engine(EngineError::UnrecognizedDamageType(_)) => StatusCode::BAD_REQUEST,
            ApiError::Engine(EngineError::MalformedDefinition(_)) | ApiError::Load(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("rejected request: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
