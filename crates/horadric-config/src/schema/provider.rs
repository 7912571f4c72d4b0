//! Completion provider configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Where and how the assistant talks to the hosted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub base_url: String,
    /// Must be non-zero.
    pub connect_timeout_secs: u64,
    /// Must be non-zero.
    pub request_timeout_secs: u64,
    /// Sampling temperature (valid range: 0.0-2.0). Provider default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            base_url: DEFAULT_BASE_URL.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            temperature: None,
            max_output_tokens: None,
        }
    }
}
