use serde::{Deserialize, Serialize};

pub const DEFAULT_WIKI_URL: &str = "https://pd2reawakening.com/wiki/index.php?title=Main_Page";

/// Assistant persona settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Reference wiki named in the opening instructions.
    pub wiki_url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            wiki_url: DEFAULT_WIKI_URL.into(),
        }
    }
}
