use std::time::Duration;

use anyhow::ensure;
use reqwest::Client as HttpClient;

pub mod translation;

static REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    client: HttpClient,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        Self { base_url, client }
    }

    async fn string_response(
        &self,
        query: &[(&str, &str)],
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(query)
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
