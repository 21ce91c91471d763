use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use tracing::error;

/// Error response rendered as `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, title: title.into(), detail }
    }

    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("{entity} not found with id {id}")))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.title, detail: self.detail };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)),
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Db(msg) => {
                // 数据库错误只写日志，不回显给客户端
                error!(err = %msg, "database operation failed");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error", Some("storage operation failed".into()))
            }
        }
    }
}

// Any body that cannot be decoded is a client error, including type mismatches.
impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Malformed Request", Some(r.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let v: JsonApiError = ServiceError::Validation("name is required".into()).into();
        assert_eq!(v.status, StatusCode::BAD_REQUEST);
        assert_eq!(v.detail.as_deref(), Some("name is required"));

        let d: JsonApiError = ServiceError::Db("connection reset".into()).into();
        assert_eq!(d.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(d.detail.as_deref(), Some("storage operation failed"));
    }

    #[test]
    fn not_found_detail_is_the_same_on_both_paths() {
        let raised: JsonApiError = ServiceError::not_found("course", 999).into();
        let looked_up = JsonApiError::not_found("course", 999);
        assert_eq!(raised.status, StatusCode::NOT_FOUND);
        assert_eq!(raised.detail, looked_up.detail);
        assert_eq!(raised.detail.as_deref(), Some("course not found with id 999"));
    }
}
