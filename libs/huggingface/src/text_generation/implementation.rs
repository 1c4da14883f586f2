use anyhow::Context;

use crate::Client;

use super::{
    CompletionRequest, CompletionResponse, TextGeneration, COMPLETIONS,
};

impl TextGeneration for Client {
    async fn completions(
        &self,
        request: CompletionRequest,
    ) -> anyhow::Result<CompletionResponse> {
        let text = self.string_response(request, COMPLETIONS).await?;

        let response =
            serde_json::from_str(&text).context("failed to parse response")?;

        Ok(response)
    }
}
