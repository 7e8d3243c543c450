//! Assistant backends for the Yapay Zeka Akademisi demo form.
//!
//! The question form's server function talks to an [`AssistantBackend`]
//! trait object. The only backend shipped today is [`CannedAssistant`],
//! which returns a fixed Turkish answer after a configurable delay.

pub mod backend;
pub mod canned;
pub mod error;

pub use backend::{AssistantBackend, AssistantReply, AssistantRequest, ExchangeId};
pub use canned::{CannedAssistant, CANNED_REPLY};
pub use error::AssistantError;
