//! Assistant demo page and its server function.

use leptos::form::ActionForm;
use leptos::prelude::*;

/// Answer payload returned to the form.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AssistantAnswer {
    pub content: String,
}

/// Server function to ask the assistant a question.
#[server]
pub async fn ask_assistant(question: String) -> Result<AssistantAnswer, ServerFnError> {
    use crate::error::AskAssistantError;
    use crate::server_helpers;
    use akademi_assistant::{AssistantRequest, ExchangeId};

    let exchange_id = ExchangeId::new();

    let question = question.trim();
    if question.is_empty() {
        tracing::debug!(exchange_id = %exchange_id, "Rejected empty question");
        return Err(AskAssistantError::EmptyQuestion.into_server_error());
    }

    let assistant = server_helpers::assistant().await?;
    let reply = assistant
        .answer(&AssistantRequest::new(question))
        .await
        .map_err(|e| {
            tracing::error!(
                exchange_id = %exchange_id,
                backend = %assistant.name(),
                error = %e,
                "Assistant backend failed"
            );
            AskAssistantError::Backend {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    tracing::info!(
        exchange_id = %exchange_id,
        source = %reply.source,
        latency_ms = reply.latency_ms,
        "Assistant reply generated"
    );

    Ok(AssistantAnswer {
        content: reply.content,
    })
}

/// The assistant demo page.
///
/// The action is created per mount, so navigating away and back starts
/// from the idle state with no leftover answer.
#[component]
pub fn AiPresentationPage() -> impl IntoView {
    let ask = ServerAction::<AskAssistant>::new();

    view! {
        <div class="ai-presentation-page">
            <h1>"Yapay Zeka Asistanı"</h1>

            <ActionForm action=ask>
                <label for="question">"Sorunuzu Yazın"</label>
                <textarea
                    id="question"
                    name="question"
                    required
                    placeholder="Yapay zeka hakkında merak ettiğiniz her şeyi sorabilirsiniz..."
                ></textarea>
                <button type="submit" class="ask-button" disabled=move || ask.pending().get()>
                    {move || if ask.pending().get() { "Yanıt Hazırlanıyor..." } else { "Sor" }}
                </button>
            </ActionForm>

            {move || {
                ask.value().get().map(|result| {
                    match result {
                        Ok(answer) => view! {
                            <div class="answer-card">
                                <h2>"Yanıt"</h2>
                                <p class="answer-text">{answer.content}</p>
                            </div>
                        }.into_any(),
                        Err(_) => view! {
                            <p class="error">"Üzgünüm, bir hata oluştu. Lütfen tekrar deneyin."</p>
                        }.into_any(),
                    }
                })
            }}

            <section class="sample-questions">
                <h2>"Örnek Sorular"</h2>
                <ul>
                    <li>"Yapay zeka nedir ve nasıl çalışır?"</li>
                    <li>"Makine öğrenmesi ve derin öğrenme arasındaki fark nedir?"</li>
                    <li>"Yapay zeka günlük hayatımızı nasıl etkiliyor?"</li>
                    <li>"Yapay zeka eğitimi için hangi programlama dillerini öğrenmeliyim?"</li>
                    <li>"Yapay zeka etiği ve güvenliği hakkında neler bilmeliyim?"</li>
                </ul>
            </section>
        </div>
    }
}
