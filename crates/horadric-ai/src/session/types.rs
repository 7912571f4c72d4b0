//! Settings used to open a session against the Gemini API.

use std::time::Duration;

use crate::gemini::GeminiConfig;

/// Everything `Session::initialize` needs besides the API key itself.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Environment variable that holds the API key.
    pub api_key_env: String,
    pub model: String,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
    /// Reference wiki named in the opening instructions.
    pub wiki_url: String,
}

impl SessionSettings {
    /// Apply these settings on top of a config that already holds the key.
    pub(crate) fn apply(&self, config: GeminiConfig) -> GeminiConfig {
        config
            .with_model(&self.model)
            .with_base_url(&self.base_url)
            .with_timeouts(self.connect_timeout, self.request_timeout)
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        let defaults = GeminiConfig::new("");
        Self {
            api_key_env: "GOOGLE_API_KEY".into(),
            model: defaults.model,
            base_url: defaults.base_url,
            connect_timeout: defaults.connect_timeout,
            request_timeout: defaults.request_timeout,
            temperature: None,
            max_output_tokens: None,
            wiki_url: "https://pd2reawakening.com/wiki/index.php?title=Main_Page".into(),
        }
    }
}
