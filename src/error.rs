use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sea_orm::DbErr;
use thiserror::Error;

/// Error taxonomy for the HTTP surface.
///
/// Each variant maps to exactly one status code, so handlers return
/// `Result<HttpResponse, ApiError>` and let actix render the failure as the
/// standard `{"error": "..."}` envelope. Storage and internal variants keep
/// their detail out of the response body and in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Storage temporarily unavailable")]
    TransientStore(#[source] DbErr),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::TransientStore(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        if self.status().is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }
        HttpResponse::build(self.status()).json(serde_json::json!({ "error": self.to_string() }))
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(message) => ApiError::NotFound(message),
            err @ (DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => ApiError::TransientStore(err),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    #[test]
    fn variants_map_to_expected_status_codes() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (ApiError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (ApiError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                ApiError::TransientStore(DbErr::Conn(sea_orm::RuntimeErr::Internal("down".into()))),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{error:?}");
        }
    }

    #[test]
    fn record_not_found_becomes_404() {
        let error = ApiError::from(DbErr::RecordNotFound("Portfolio not found".into()));
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "Portfolio not found");
    }

    #[test]
    fn connection_failures_become_503() {
        let error = ApiError::from(DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "pool timed out".into(),
        )));
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        // The body must not leak connection details.
        assert_eq!(error.to_string(), "Storage temporarily unavailable");
    }

    #[test]
    fn other_db_errors_become_opaque_500s() {
        let error = ApiError::from(DbErr::Custom("constraint blew up".into()));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Internal server error");
    }

    #[test]
    fn response_body_uses_error_envelope() {
        let response = ApiError::NotFound("User not found".into()).error_response();
        let bytes = response.into_body().try_into_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "User not found");
    }
}
