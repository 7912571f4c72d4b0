//! Session struct and transcript ownership.

use std::sync::Arc;

use horadric_common::{ConfigError, SessionId};
use tracing::info;

use crate::gemini::{GeminiClient, GeminiConfig};
use crate::prompt;
use crate::token_tracker::TokenTracker;
use crate::{CompletionProvider, HostedTool, Turn};

use super::types::SessionSettings;

/// A conversation with the hosted model.
///
/// The transcript is append-only and always opens with the instruction/
/// acknowledgement pair. Callers only get a read-only view of it.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) transcript: Vec<Turn>,
    pub(super) provider: Arc<dyn CompletionProvider>,
    /// Offered on every call.
    pub(super) tools: Vec<HostedTool>,
    pub(super) tracker: TokenTracker,
}

impl Session {
    /// Build a Gemini-backed session. Fails when the API key variable is
    /// unset; makes no network call.
    pub fn initialize(settings: &SessionSettings) -> Result<Self, ConfigError> {
        let config = settings.apply(GeminiConfig::from_env(&settings.api_key_env)?);
        let client = GeminiClient::new(config)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        info!(model = %client.config().model, "Gemini client ready");

        Ok(Self::with_provider(
            Arc::new(client),
            prompt::instructions(&settings.wiki_url),
            prompt::ACKNOWLEDGEMENT,
        ))
    }

    /// Build a session over any provider, opening with the given pair.
    pub fn with_provider(
        provider: Arc<dyn CompletionProvider>,
        instructions: impl Into<String>,
        acknowledgement: impl Into<String>,
    ) -> Self {
        let id = SessionId::new();
        info!(session = %id, "session started");
        Self {
            id,
            transcript: vec![Turn::user(instructions), Turn::model(acknowledgement)],
            provider,
            tools: HostedTool::ALL.to_vec(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The full transcript, opening pair included.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
