pub mod implementation;

use reqwest::Body;
use serde::{Deserialize, Serialize};

static COMPLETIONS: &str = "completions";

pub trait TextGeneration {
    fn completions(
        &self,
        request: CompletionRequest,
    ) -> impl std::future::Future<Output = anyhow::Result<CompletionResponse>> + Send;
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f64,
    pub top_p: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
}

impl From<CompletionRequest> for Body {
    fn from(val: CompletionRequest) -> Self {
        let body = serde_json::to_string(&val).unwrap();
        Body::from(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_unset_max_tokens() {
        let request = CompletionRequest {
            prompt: "Summary:".to_string(),
            temperature: 0.7,
            top_p: 0.7,
            max_tokens: None,
        };

        let body = serde_json::to_string(&request).unwrap();
        assert!(!body.contains("max_tokens"));
    }

    #[test]
    fn response_parses_first_choice() {
        let raw = r#"{"id":"cmpl-1","object":"text_completion","choices":[{"index":0,"text":" A short summary.","finish_reason":"stop"}]}"#;

        let response: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.choices[0].text, " A short summary.");
    }
}
