use axum::{extract::State, Json};
use uuid::Uuid;

pub mod request;
pub mod response;
pub mod service;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::SummarizeRequest;
use self::response::SummarizeResponse;
use self::service::Summarization;

/// Languages the service accepts as summarization targets.
const SUPPORTED_LANGS: [&str; 3] = ["pt", "en", "es"];

/// Translate a text into the target language and summarize it
#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summarize a text successfully", body = [SummarizeResponse]),
        (status = 400, description = "Empty text or unsupported language code"),
        (status = 500, description = "A provider call failed"),
    )
)]
pub async fn post_summarize(
    State(state): State<ApiState>,
    Json(body): Json<SummarizeRequest>,
) -> ApiResponse<Json<SummarizeResponse>> {
    if body.text.trim().is_empty() {
        return Err(ApiError::ClientError(
            "text must not be empty".to_string(),
        ));
    }

    let lang = validate_lang(&body.lang).map_err(ApiError::ClientError)?;

    let result = state
        .summarizer
        .summarize(&body.text, &lang)
        .await
        .into_response()?;

    Ok(Json(build_response(result)))
}

fn build_response(result: Summarization) -> SummarizeResponse {
    SummarizeResponse {
        id: Uuid::new_v4().to_string(),
        summary: result.summary,
        translated_text: result.translated_text,
    }
}

fn validate_lang(lang: &str) -> Result<String, String> {
    let normalized = lang.trim().to_lowercase();
    if SUPPORTED_LANGS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(format!(
            "unsupported lang: {:?}, expected one of {:?}",
            lang, SUPPORTED_LANGS
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_langs_case_insensitively() {
        assert_eq!(validate_lang("pt").unwrap(), "pt");
        assert_eq!(validate_lang("ES").unwrap(), "es");
        assert_eq!(validate_lang("En").unwrap(), "en");
    }

    #[test]
    fn rejects_unsupported_or_missing_lang() {
        assert!(validate_lang("fr").is_err());
        assert!(validate_lang("").is_err());
        assert!(validate_lang("eng").is_err());
    }

    #[test]
    fn repeated_responses_differ_only_in_id() {
        let result = || Summarization {
            summary: "Un saludo.".to_string(),
            translated_text: "Hola, mundo!".to_string(),
        };

        let first = build_response(result());
        let second = build_response(result());

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.translated_text, second.translated_text);
        assert_ne!(first.id, second.id);
    }
}
