//! Typed `generateContent` replies and the rules for turning one into text.
//!
//! Every field the provider may leave out is an `Option` or a defaulted
//! `Vec`, so presence checks happen on the parsed value instead of on raw JSON.

use serde::{Deserialize, Serialize};

use crate::{MalformedResponse, TokenUsage};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl CompletionResult {
    pub fn usage(&self) -> TokenUsage {
        self.usage_metadata
            .as_ref()
            .map(|meta| TokenUsage {
                input_tokens: meta.prompt_token_count,
                output_tokens: meta.candidates_token_count,
            })
            .unwrap_or_default()
    }

    /// Why the prompt was refused, when the provider says so.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_context_metadata: Option<UrlContextMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content fragment. Non-text fragments (tool calls, executable code)
/// deserialize with `text: None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Pages the URL context tool fetched while answering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlContextMetadata {
    #[serde(default)]
    pub url_metadata: Vec<UrlMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_retrieval_status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}

/// Text pulled out of the first candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Every text fragment, concatenated in order.
    pub text: String,
    /// Rendered source list, present only when the URL tool fetched something.
    pub citations: Option<String>,
}

/// Unwrap the first candidate of a reply into plain text.
pub fn extract_text(result: &CompletionResult) -> Result<Reply, MalformedResponse> {
    let candidate = result
        .candidates
        .first()
        .ok_or(MalformedResponse::NoCandidates)?;
    let content = candidate
        .content
        .as_ref()
        .ok_or(MalformedResponse::NoContent)?;
    if content.parts.is_empty() {
        return Err(MalformedResponse::NoParts);
    }

    let text = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect::<String>();

    Ok(Reply {
        text,
        citations: candidate
            .url_context_metadata
            .as_ref()
            .and_then(citation_block),
    })
}

/// Render fetched URLs as a trailing `[URL Sources: ...]` block.
pub fn citation_block(metadata: &UrlContextMetadata) -> Option<String> {
    let sources: Vec<String> = metadata
        .url_metadata
        .iter()
        .filter_map(|entry| {
            let url = entry.retrieved_url.as_deref()?;
            Some(match entry.url_retrieval_status.as_deref() {
                Some(status) => format!("{url} ({status})"),
                None => url.to_string(),
            })
        })
        .collect();

    if sources.is_empty() {
        return None;
    }
    Some(format!("\n\n[URL Sources: {}]", sources.join(", ")))
}
