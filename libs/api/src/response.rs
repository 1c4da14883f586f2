use axum::{http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status_code, message).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);
            ApiError::ServerError(e.to_string())
        })
    }
}
