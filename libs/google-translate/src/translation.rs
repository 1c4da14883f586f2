pub mod implementation;

use serde::Serialize;

pub trait Translation {
    fn translate(
        &self,
        request: TranslationRequest,
    ) -> impl std::future::Future<Output = anyhow::Result<TranslationResponse>> + Send;
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_lang: String,
}

#[derive(Debug)]
pub struct TranslationResponse {
    pub translated_text: String,
}
