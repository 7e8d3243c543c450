//! Canned assistant backend.
//!
//! Answers every question with the same fixed text after a configurable
//! delay. This is the demo backend the site ships with; the delay stands
//! in for real model latency so the form's pending state is visible.

use crate::backend::{AssistantBackend, AssistantReply, AssistantRequest};
use crate::error::AssistantError;
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// The default reply text. Line breaks are part of the content; the UI
/// preserves them when rendering.
pub const CANNED_REPLY: &str = "Yapay zeka, insan zekasını taklit eden ve öğrenebilen,\n\
                                muhakeme edebilen ve problem çözebilen bilgisayar sistemleridir.\n\
                                Makine öğrenmesi, derin öğrenme ve doğal dil işleme gibi alt alanları vardır.";

/// An assistant that replies with fixed text after a fixed delay.
#[derive(Debug, Clone)]
pub struct CannedAssistant {
    reply: String,
    delay: Duration,
}

impl CannedAssistant {
    /// Creates a canned assistant with the default reply text.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            reply: CANNED_REPLY.to_string(),
            delay,
        }
    }

    /// Overrides the reply text.
    #[must_use]
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = reply.into();
        self
    }
}

#[async_trait]
impl AssistantBackend for CannedAssistant {
    async fn answer(
        &self,
        _request: &AssistantRequest,
    ) -> Result<AssistantReply, AssistantError> {
        let started = Instant::now();
        tokio::time::sleep(self.delay).await;
        Ok(AssistantReply {
            content: self.reply.clone(),
            source: self.name().to_string(),
            latency_ms: started.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &str {
        "canned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn replies_with_fixed_text() {
        let assistant = CannedAssistant::new(Duration::from_millis(0));
        let reply = assistant
            .answer(&AssistantRequest::new("Yapay zeka nedir?"))
            .await
            .expect("answer");
        assert_eq!(reply.content, CANNED_REPLY);
        assert_eq!(reply.source, "canned");
    }

    #[tokio::test]
    async fn same_reply_for_any_question() {
        let assistant = CannedAssistant::new(Duration::from_millis(0));
        let first = assistant
            .answer(&AssistantRequest::new("kısa"))
            .await
            .expect("answer");
        let second = assistant
            .answer(&AssistantRequest::new("tamamen farklı, çok daha uzun bir soru"))
            .await
            .expect("answer");
        assert_eq!(first.content, second.content);
    }

    #[tokio::test]
    async fn waits_for_the_configured_delay() {
        let delay = Duration::from_millis(50);
        let assistant = CannedAssistant::new(delay);
        let started = Instant::now();
        let reply = assistant
            .answer(&AssistantRequest::new("soru"))
            .await
            .expect("answer");
        assert!(started.elapsed() >= delay);
        assert!(reply.latency_ms >= 50);
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let assistant: Arc<dyn AssistantBackend> =
            Arc::new(CannedAssistant::new(Duration::from_millis(0)).with_reply("test yanıtı"));
        let reply = assistant
            .answer(&AssistantRequest::new("soru"))
            .await
            .expect("answer");
        assert_eq!(reply.content, "test yanıtı");
        assert_eq!(assistant.name(), "canned");
    }
}
