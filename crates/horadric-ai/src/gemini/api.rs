//! CompletionProvider implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, CompletionProvider, CompletionResult, HostedTool, Turn};

use super::client::GeminiClient;

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn generate(
        &self,
        transcript: &[Turn],
        tools: &[HostedTool],
    ) -> Result<CompletionResult, AiError> {
        let body = self.build_request_body(transcript, tools);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = transcript.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await.map_err(transport_error)?;
        self.parse_response(&text)
    }
}
