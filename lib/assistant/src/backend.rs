//! Assistant backend abstraction.
//!
//! Provides a unified interface the question form talks to, so the demo
//! backend and any future model integration look the same to the server.

use crate::error::AssistantError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for one question/reply exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeId(Ulid);

impl ExchangeId {
    /// Creates a new exchange ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ExchangeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ask_{}", self.0)
    }
}

/// A question submitted to an assistant backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantRequest {
    /// The question text, as typed by the visitor.
    pub question: String,
}

impl AssistantRequest {
    /// Creates a new request from a question.
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// A reply from an assistant backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    /// The reply text. Line breaks are part of the content.
    pub content: String,
    /// Name of the backend that produced the reply.
    pub source: String,
    /// Time spent producing the reply, in milliseconds.
    pub latency_ms: u64,
}

/// Trait for assistant backends.
///
/// This trait defines the interface the question form's server function
/// calls through. The site ships with the canned backend in
/// [`crate::canned`]; a real model integration would implement the same
/// trait.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Produces a reply for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce a reply.
    async fn answer(&self, request: &AssistantRequest) -> Result<AssistantReply, AssistantError>;

    /// Returns the backend name, for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_id_display() {
        let id = ExchangeId::new();
        let display = id.to_string();
        assert!(display.starts_with("ask_"));
    }

    #[test]
    fn exchange_ids_are_unique() {
        let first = ExchangeId::new();
        let second = ExchangeId::new();
        assert_ne!(first, second);
    }

    #[test]
    fn request_from_question() {
        let request = AssistantRequest::new("Yapay zeka nedir?");
        assert_eq!(request.question, "Yapay zeka nedir?");
    }

    #[test]
    fn reply_serde() {
        let reply = AssistantReply {
            content: "satır bir\nsatır iki".to_string(),
            source: "canned".to_string(),
            latency_ms: 1000,
        };
        let json = serde_json::to_string(&reply).expect("serialize");
        let parsed: AssistantReply = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(reply, parsed);
    }
}
