use std::time::Duration;

use anyhow::ensure;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Body, Client as HttpClient,
};

pub mod text_generation;

static REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the OpenAI-compatible route of a HuggingFace inference
/// endpoint, e.g. `https://api-inference.huggingface.co/models/<model>/v1`.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    client: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, token: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_str("*/*").unwrap());
        headers.insert(
            "Content-Type",
            HeaderValue::from_str("application/json").unwrap(),
        );
        headers.insert(
            "Authorization",
            HeaderValue::from_str(format!("Bearer {}", token).as_str())
                .unwrap(),
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn string_response<R: Into<Body>>(
        &self,
        request: R,
        path: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .body(request)
            .send()
            .await?;

        let status_code = response.status();
        let text = response.text().await;

        ensure!(
            status_code.is_success(),
            "status code: {}, response: {:?}",
            status_code,
            text
        );

        Ok(text?)
    }
}
