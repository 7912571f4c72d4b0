//! Conversation session management.
//!
//! A `Session` owns the transcript, opens it with the instruction/
//! acknowledgement pair, and turns each provider reply into the text shown
//! to the user.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::Session;
pub use types::SessionSettings;
