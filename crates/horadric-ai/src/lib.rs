//! AI engine for Horadric.
//!
//! Provides:
//! - The transcript types sent to the model on every call
//! - A `CompletionProvider` seam with a Gemini `generateContent` client
//! - Response unwrapping and URL citation formatting
//! - The conversation `Session` with its fixed opening instructions

pub mod gemini;
pub mod prompt;
pub mod response;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use gemini::{GeminiClient, GeminiConfig};
pub use response::{
    citation_block, extract_text, Candidate, CompletionResult, Content, Part, Reply,
    UrlContextMetadata, UrlMetadata,
};
pub use session::{Session, SessionSettings};
pub use token_tracker::TokenTracker;

/// A hosted model that turns a transcript into candidate replies.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn generate(
        &self,
        transcript: &[Turn],
        tools: &[HostedTool],
    ) -> Result<CompletionResult, AiError>;
}

/// Who produced a turn. Serialized with the provider's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One message in the transcript. Fields are private so a turn cannot
/// change once it has been appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Tools executed on the provider's side. The model decides whether to use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostedTool {
    /// Fetch and read pages at URLs mentioned in the conversation.
    UrlContext,
    /// General web search.
    GoogleSearch,
}

impl HostedTool {
    /// Every tool, in the order they are declared to the provider.
    pub const ALL: [HostedTool; 2] = [HostedTool::UrlContext, HostedTool::GoogleSearch];

    pub fn wire_name(self) -> &'static str {
        match self {
            HostedTool::UrlContext => "url_context",
            HostedTool::GoogleSearch => "google_search",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// A reply that arrived but has nothing usable in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedResponse {
    #[error("No valid response received from Gemini API")]
    NoCandidates,
    #[error("No content in response candidate")]
    NoContent,
    #[error("No parts in content")]
    NoParts,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),
}
