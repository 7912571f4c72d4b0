//! Session behavior against a scripted provider.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::{AiError, CompletionProvider, CompletionResult, HostedTool, Role, Turn};

/// Replays queued results and records what each call was sent.
#[derive(Default)]
struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<CompletionResult, AiError>>>,
    seen: Mutex<Vec<(Vec<Turn>, Vec<HostedTool>)>>,
}

impl ScriptedProvider {
    fn with(replies: Vec<Result<CompletionResult, AiError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(Vec<Turn>, Vec<HostedTool>)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn generate(
        &self,
        transcript: &[Turn],
        tools: &[HostedTool],
    ) -> Result<CompletionResult, AiError> {
        self.seen
            .lock()
            .unwrap()
            .push((transcript.to_vec(), tools.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::ApiError("no scripted reply".into())))
    }
}

fn text_reply(fragments: &[&str]) -> Result<CompletionResult, AiError> {
    let parts: Vec<_> = fragments.iter().map(|t| json!({ "text": t })).collect();
    Ok(serde_json::from_value(json!({
        "candidates": [{ "content": { "role": "model", "parts": parts } }],
        "usageMetadata": { "promptTokenCount": 100, "candidatesTokenCount": 10 }
    }))
    .unwrap())
}

fn session(provider: Arc<ScriptedProvider>) -> Session {
    Session::with_provider(provider, "be a PD2 expert", "understood")
}

#[test]
fn new_session_opens_with_instruction_pair() {
    let session = session(ScriptedProvider::with(vec![]));
    let roles: Vec<_> = session.transcript().iter().map(Turn::role).collect();
    assert_eq!(roles, [Role::User, Role::Model]);
    assert_eq!(session.transcript()[0].text(), "be a PD2 expert");
    assert_eq!(session.transcript()[1].text(), "understood");
}

#[test]
fn initialize_without_credential_is_config_error() {
    let settings = SessionSettings {
        api_key_env: "HORADRIC_TEST_SESSION_UNSET_KEY".into(),
        ..SessionSettings::default()
    };
    let err = Session::initialize(&settings).err().unwrap();
    assert!(matches!(err, horadric_common::ConfigError::MissingCredential(_)));
}

#[test]
fn initialize_with_credential_opens_with_pd2_instructions() {
    std::env::set_var("HORADRIC_TEST_SESSION_KEY", "test-key");
    let settings = SessionSettings {
        api_key_env: "HORADRIC_TEST_SESSION_KEY".into(),
        ..SessionSettings::default()
    };
    let session = Session::initialize(&settings).unwrap();
    assert_eq!(session.turn_count(), 2);
    assert!(session.transcript()[0]
        .text()
        .contains("[INSTRUCTIONS FOR ASSISTANT]"));
    assert_eq!(session.transcript()[1].text(), crate::prompt::ACKNOWLEDGEMENT);
    assert_eq!(session.tracker().call_count(), 0);
}

#[tokio::test]
async fn spirit_question_round_trip() {
    let provider = ScriptedProvider::with(vec![text_reply(&["Spirit grants +2 all skills."])]);
    let mut session = session(provider.clone());

    let answer = session.submit("What does Spirit rune word do?").await;

    assert_eq!(answer, "Spirit grants +2 all skills.");
    assert_eq!(session.turn_count(), 4);
    assert_eq!(session.transcript()[2], Turn::user("What does Spirit rune word do?"));
    assert_eq!(session.transcript()[3], Turn::model("Spirit grants +2 all skills."));
}

#[tokio::test]
async fn successful_submits_add_two_turns_each() {
    let provider = ScriptedProvider::with(vec![text_reply(&["one"]), text_reply(&["two"])]);
    let mut session = session(provider.clone());

    session.submit("first").await;
    assert_eq!(session.turn_count(), 4);
    session.submit("second").await;
    assert_eq!(session.turn_count(), 6);
    assert_eq!(session.transcript()[4].text(), "second");
    assert_eq!(session.transcript()[5].role(), Role::Model);

    // Second call carries the whole history, new question last.
    let calls = provider.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].0.len(), 5);
    assert_eq!(calls[1].0.last().unwrap().text(), "second");
}

#[tokio::test]
async fn every_call_offers_both_hosted_tools() {
    let provider = ScriptedProvider::with(vec![text_reply(&["ok"])]);
    let mut session = session(provider.clone());
    session.submit("hi").await;
    assert_eq!(provider.calls()[0].1, HostedTool::ALL.to_vec());
}

#[tokio::test]
async fn fragments_are_joined_in_order() {
    let provider = ScriptedProvider::with(vec![text_reply(&["A", "B", "C"])]);
    let mut session = session(provider);
    let answer = session.submit("letters").await;
    assert!(answer.starts_with("ABC"));
}

#[tokio::test]
async fn provider_failure_is_returned_as_text_and_not_remembered() {
    let provider = ScriptedProvider::with(vec![Err(AiError::NetworkError(
        "connection refused".into(),
    ))]);
    let mut session = session(provider);

    let answer = session.submit("Is Enigma still good?").await;

    assert_eq!(
        answer,
        "Error generating response: Network error: connection refused"
    );
    assert_eq!(session.turn_count(), 3);
    assert_eq!(session.transcript()[2].role(), Role::User);
}

#[tokio::test]
async fn repeated_failures_only_add_user_turns() {
    let provider = ScriptedProvider::with(vec![
        Err(AiError::Timeout),
        Err(AiError::RateLimited),
        Err(AiError::ApiError("HTTP 500 Internal Server Error: boom".into())),
    ]);
    let mut session = session(provider);

    for question in ["a", "b", "c"] {
        let answer = session.submit(question).await;
        assert!(answer.contains("Error generating response:"));
    }

    assert_eq!(session.turn_count(), 5);
    let model_turns = session
        .transcript()
        .iter()
        .filter(|t| t.role() == Role::Model)
        .count();
    assert_eq!(model_turns, 1);
    assert_eq!(session.transcript()[0].text(), "be a PD2 expert");
}

#[tokio::test]
async fn empty_candidates_return_fixed_message() {
    let provider = ScriptedProvider::with(vec![Ok(CompletionResult::default())]);
    let mut session = session(provider);

    let answer = session.submit("hello").await;

    assert_eq!(answer, "No valid response received from Gemini API");
    assert_eq!(session.turn_count(), 3);
}

#[tokio::test]
async fn candidate_without_content_or_parts_is_reported() {
    let no_content: CompletionResult =
        serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
    let no_parts: CompletionResult =
        serde_json::from_value(json!({ "candidates": [{ "content": { "parts": [] } }] })).unwrap();
    let provider = ScriptedProvider::with(vec![Ok(no_content), Ok(no_parts)]);
    let mut session = session(provider);

    assert_eq!(session.submit("x").await, "No content in response candidate");
    assert_eq!(session.submit("y").await, "No parts in content");
    assert_eq!(session.turn_count(), 4);
}

#[tokio::test]
async fn citations_are_returned_but_not_stored() {
    let reply: CompletionResult = serde_json::from_value(json!({
        "candidates": [{
            "content": { "parts": [{ "text": "Insight is a polearm runeword." }] },
            "urlContextMetadata": { "urlMetadata": [{
                "retrievedUrl": "https://wiki.projectdiablo2.com/wiki/Runewords",
                "urlRetrievalStatus": "URL_RETRIEVAL_STATUS_SUCCESS"
            }] }
        }]
    }))
    .unwrap();
    let provider = ScriptedProvider::with(vec![Ok(reply)]);
    let mut session = session(provider);

    let answer = session.submit("Insight?").await;

    assert_eq!(
        answer,
        "Insight is a polearm runeword.\n\n[URL Sources: \
         https://wiki.projectdiablo2.com/wiki/Runewords (URL_RETRIEVAL_STATUS_SUCCESS)]"
    );
    assert_eq!(
        session.transcript().last().unwrap().text(),
        "Insight is a polearm runeword."
    );
}

#[tokio::test]
async fn usage_is_tracked_per_call() {
    let provider = ScriptedProvider::with(vec![text_reply(&["a"]), text_reply(&["b"])]);
    let mut session = session(provider);
    session.submit("1").await;
    session.submit("2").await;
    assert_eq!(session.tracker().call_count(), 2);
    assert_eq!(session.tracker().total().input_tokens, 200);
    assert_eq!(session.tracker().total().output_tokens, 20);
}
