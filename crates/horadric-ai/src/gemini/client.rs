//! Gemini API client struct, request building, and response parsing.

use serde_json::{json, Map, Value};

use crate::{AiError, CompletionResult, HostedTool, Turn};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, transcript: &[Turn], tools: &[HostedTool]) -> Value {
        let contents: Vec<Value> = transcript
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.role().as_str(),
                    "parts": [{ "text": turn.text() }]
                })
            })
            .collect();

        let mut generation_config = json!({ "responseModalities": ["TEXT"] });
        if let Some(temperature) = self.config.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.config.max_output_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }

        let mut body = json!({
            "contents": contents,
            "generationConfig": generation_config,
        });

        if !tools.is_empty() {
            let tool_defs: Vec<Value> = tools
                .iter()
                .map(|tool| {
                    let mut decl = Map::new();
                    decl.insert(tool.wire_name().to_string(), json!({}));
                    Value::Object(decl)
                })
                .collect();
            body["tools"] = Value::Array(tool_defs);
        }

        body
    }

    /// Parse a `generateContent` response body.
    pub(crate) fn parse_response(&self, body: &str) -> Result<CompletionResult, AiError> {
        serde_json::from_str(body).map_err(|e| AiError::ParseError(e.to_string()))
    }
}
