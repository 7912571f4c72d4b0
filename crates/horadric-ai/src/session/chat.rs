//! Submitting a user turn and turning the reply into text.

use horadric_common::new_correlation_id;
use tracing::{error, info, info_span, warn, Instrument};

use crate::response::{self, Reply};
use crate::{AiError, Turn};

use super::manager::Session;

impl Session {
    /// Send `user_text` with the whole transcript and return what to show.
    ///
    /// Never fails: provider and transport errors come back as
    /// `"Error generating response: ..."` and empty replies as their
    /// fixed message. In both cases the user turn stays in the transcript
    /// and no model turn is added. A reply's URL citations are appended to
    /// the returned text only; the stored model turn holds the bare answer.
    pub async fn submit(&mut self, user_text: impl Into<String>) -> String {
        let span = info_span!("submit", session = %self.id, request = %new_correlation_id());
        self.transcript.push(Turn::user(user_text));

        let reply = match self.complete().instrument(span.clone()).await {
            Ok(reply) => reply,
            Err(AiError::MalformedResponse(reason)) => {
                span.in_scope(|| error!("{reason}"));
                return reason.to_string();
            }
            Err(e) => {
                let message = format!("Error generating response: {e}");
                span.in_scope(|| error!("{message}"));
                return message;
            }
        };

        self.transcript.push(Turn::model(reply.text.clone()));

        match reply.citations {
            Some(citations) => {
                span.in_scope(|| info!(citations = %citations.trim(), "URL context used"));
                reply.text + &citations
            }
            None => reply.text,
        }
    }

    async fn complete(&mut self) -> Result<Reply, AiError> {
        info!(turns = self.transcript.len(), "Sending request to Gemini API...");
        let result = self.provider.generate(&self.transcript, &self.tools).await?;
        info!("Response received from Gemini API");

        self.tracker.record(&result.usage());
        if let Some(reason) = result.block_reason() {
            warn!(reason, "prompt blocked by provider");
        }

        Ok(response::extract_text(&result)?)
    }
}
