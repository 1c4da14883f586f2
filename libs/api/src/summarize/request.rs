use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SummarizeRequest {
    pub text: String,
    pub lang: String,
}
