//! Google Gemini API client.
//!
//! Implements `CompletionProvider` over the Generative Language API's
//! `generateContent` endpoint with the hosted search and URL tools.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
