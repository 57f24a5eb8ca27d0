//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::domains::access::AccessError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Access(AccessError::MissingEmail) => StatusCode::BAD_REQUEST,
            AppError::Access(AccessError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Access(AccessError::Forbidden) => StatusCode::FORBIDDEN,
            AppError::Access(AccessError::Internal(_)) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Fixed bodies only: internal details stay in the logs
        let status = self.status_code();
        let body = match &self {
            AppError::Access(AccessError::MissingEmail) => "Email is required.",
            AppError::Access(AccessError::NotFound) => "Invalid or expired approval link.",
            AppError::Access(AccessError::Forbidden) => "403 Forbidden",
            AppError::Access(AccessError::Internal(e)) | AppError::Internal(e) => {
                error!(error = %e, "Request failed");
                "Internal server error"
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::from(AccessError::MissingEmail).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(AccessError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(AccessError::Forbidden).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::from(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_error_body_does_not_leak() {
        let response = AppError::from(anyhow::anyhow!("smtp password rejected")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Internal server error");
    }
}
