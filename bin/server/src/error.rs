//! Domain error types for server operations.
//!
//! This module provides typed error variants for server-side operations.
//! `into_server_error` maps each variant to a user-safe message; details
//! stay in the logs.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors from the assistant question form.
#[derive(Debug)]
pub enum AskAssistantError {
    /// The submitted question was empty after trimming.
    EmptyQuestion,
    /// The assistant backend failed to produce a reply.
    Backend { details: String },
}

impl fmt::Display for AskAssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuestion => write!(f, "question is empty"),
            Self::Backend { details } => {
                write!(f, "assistant backend error: {}", details)
            }
        }
    }
}

impl AskAssistantError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            AskAssistantError::EmptyQuestion => ServerFnError::new("Soru boş olamaz"),
            AskAssistantError::Backend { .. } => ServerFnError::new("Yanıt oluşturulamadı"),
        }
    }
}
