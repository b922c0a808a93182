use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// Success envelope: `{code, message, data?}` with `code` mirroring the
/// HTTP status (always 200 here; errors go through ApiError).
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    message: String,
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope without a data section, for deletes.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut envelope = json!({
            "code": 200,
            "message": self.message,
        });

        if let Some(data) = self.data {
            match serde_json::to_value(&data) {
                Ok(value) => {
                    envelope["data"] = value;
                }
                Err(e) => {
                    tracing::error!("Failed to serialize response data: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "code": 500,
                            "message": "Internal server error",
                        })),
                    )
                        .into_response();
                }
            }
        }

        (StatusCode::OK, Json(envelope)).into_response()
    }
}

/// Result alias handlers return; errors render through ApiError.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
