//! `.env` loading and config-to-session mapping.

use std::path::PathBuf;
use std::time::Duration;

use horadric_ai::SessionSettings;
use horadric_config::HoradricConfig;

/// Load `.env` files. Variables already in the environment win, and the
/// working directory's file is read before the per-user one.
pub fn load_dotenv() {
    for path in dotenv_candidates() {
        if !path.exists() {
            continue;
        }
        if let Err(e) = dotenvy::from_path(&path) {
            eprintln!("Warning: Failed to parse {}: {e}", path.display());
        }
    }
}

fn dotenv_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".env")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("horadric").join(".env"));
    }
    paths
}

pub fn session_settings(config: &HoradricConfig) -> SessionSettings {
    let provider = &config.provider;
    SessionSettings {
        api_key_env: provider.api_key_env.clone(),
        model: provider.model.clone(),
        base_url: provider.base_url.clone(),
        connect_timeout: Duration::from_secs(provider.connect_timeout_secs),
        request_timeout: Duration::from_secs(provider.request_timeout_secs),
        temperature: provider.temperature,
        max_output_tokens: provider.max_output_tokens,
        wiki_url: config.assistant.wiki_url.clone(),
    }
}
