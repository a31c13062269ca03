use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::exception::HttpException;

/// JSON body returned for every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionBody {
    /// HTTP status code
    #[schema(example = 404)]
    pub status_code: u16,
    /// Human-readable error message
    #[schema(example = "Application not found")]
    pub message: String,
    /// Short reason phrase (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Not Found")]
    pub error: Option<String>,
}

impl From<&HttpException> for ExceptionBody {
    fn from(exception: &HttpException) -> Self {
        Self {
            status_code: exception.status_code(),
            message: exception.message_text(),
            error: exception.payload().field("error").map(str::to_string),
        }
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ExceptionBody::from(&self))).into_response()
    }
}
