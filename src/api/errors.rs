use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::errors::FleetError;

impl IntoResponse for FleetError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            FleetError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            FleetError::Authentication(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            FleetError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            // internal detail stays out of responses
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
