use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = [RootResponse])
    )
)]
pub async fn get_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "API is running".to_string(),
    })
}
