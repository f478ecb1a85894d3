//! Message composition service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use sentra_core::agenda::{derive_strategy, AgendaConfig, CommunicationStrategy};
use sentra_core::compose::{render_manual, whatsapp_link};
use sentra_core::customers::Customer;
use sentra_core::templates::{MessageTemplate, TemplateKind};

use crate::client::GenerativeClient;
use crate::error::AiError;
use crate::prompt::build_prompt;

/// One composition request: a customer, the chosen template, and the
/// agenda knobs the strategy derivation needs.
pub struct ComposeRequest<'a> {
    pub customer: &'a Customer,
    pub template: &'a MessageTemplate,
    pub config: &'a AgendaConfig,
    pub today: NaiveDate,
}

/// A ready-to-send draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedMessage {
    pub body: String,
    pub strategy: CommunicationStrategy,
    /// `None` when the customer has no usable phone number.
    pub whatsapp_url: Option<String>,
}

#[async_trait]
pub trait MessageComposerTrait: Send + Sync {
    async fn compose(&self, request: ComposeRequest<'_>) -> Result<ComposedMessage, AiError>;
}

/// Renders manual templates locally and routes AI templates through the
/// generative client. Built without a client, AI templates fail with
/// `MissingApiKey` while manual ones keep working.
pub struct MessageComposer {
    client: Option<Arc<dyn GenerativeClient>>,
}

impl MessageComposer {
    pub fn new(client: Option<Arc<dyn GenerativeClient>>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageComposerTrait for MessageComposer {
    async fn compose(&self, request: ComposeRequest<'_>) -> Result<ComposedMessage, AiError> {
        let strategy = derive_strategy(request.customer, request.config, request.today);
        let body = match &request.template.kind {
            TemplateKind::Manual { content } => render_manual(content, request.customer),
            TemplateKind::Ai { prompt_context } => {
                let client = self.client.as_ref().ok_or(AiError::MissingApiKey)?;
                let prompt = build_prompt(request.customer, strategy, prompt_context);
                client.generate(&prompt).await?
            }
        };
        if body.trim().is_empty() {
            return Err(AiError::invalid_input(format!(
                "template '{}' produced an empty message",
                request.template.id
            )));
        }

        let whatsapp_url = match request.customer.phone.as_deref() {
            Some(phone) => match whatsapp_link(phone, &body) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(
                        "No deep link for customer {}: {e}",
                        request.customer.id
                    );
                    None
                }
            },
            None => None,
        };

        Ok(ComposedMessage {
            body,
            strategy,
            whatsapp_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentra_core::customers::{ingest_customers, parse_sheet, FieldMapping};

    struct CannedClient(String);

    #[async_trait]
    impl GenerativeClient for CannedClient {
        async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
            Ok(self.0.clone())
        }
    }

    fn customer(headers: &str, row: &str) -> Customer {
        let sheet = parse_sheet(&format!("{}\n{}", headers, row)).unwrap();
        ingest_customers(&sheet, &FieldMapping::default())
            .into_iter()
            .next()
            .unwrap()
    }

    fn manual_template(content: &str) -> MessageTemplate {
        MessageTemplate {
            id: "t1".to_string(),
            label: "Pengingat".to_string(),
            icon: "bell".to_string(),
            kind: TemplateKind::Manual {
                content: content.to_string(),
            },
            revision: 1,
        }
    }

    fn ai_template() -> MessageTemplate {
        MessageTemplate {
            id: "t2".to_string(),
            label: "AI".to_string(),
            icon: "sparkles".to_string(),
            kind: TemplateKind::Ai {
                prompt_context: String::new(),
            },
            revision: 1,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()
    }

    #[tokio::test]
    async fn test_manual_template_renders_locally() {
        let composer = MessageComposer::new(None);
        let c = customer("Nama Nasabah,No HP", "Siti,08123456789");
        let config = AgendaConfig::default();
        let result = composer
            .compose(ComposeRequest {
                customer: &c,
                template: &manual_template("Halo {name}"),
                config: &config,
                today: today(),
            })
            .await
            .unwrap();
        assert_eq!(result.body, "Halo Siti");
        assert_eq!(
            result.whatsapp_url.as_deref(),
            Some("https://wa.me/628123456789?text=Halo%20Siti")
        );
    }

    #[tokio::test]
    async fn test_ai_template_uses_client() {
        let composer =
            MessageComposer::new(Some(Arc::new(CannedClient("Assalamualaikum".to_string()))));
        let c = customer("Nama Nasabah", "Siti");
        let config = AgendaConfig::default();
        let result = composer
            .compose(ComposeRequest {
                customer: &c,
                template: &ai_template(),
                config: &config,
                today: today(),
            })
            .await
            .unwrap();
        assert_eq!(result.body, "Assalamualaikum");
        assert!(result.whatsapp_url.is_none()); // no phone on record
    }

    #[tokio::test]
    async fn test_ai_template_without_client_fails() {
        let composer = MessageComposer::new(None);
        let c = customer("Nama Nasabah", "Siti");
        let config = AgendaConfig::default();
        let err = composer
            .compose(ComposeRequest {
                customer: &c,
                template: &ai_template(),
                config: &config,
                today: today(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_strategy_reported_with_draft() {
        let composer = MessageComposer::new(None);
        let c = customer("Nama Nasabah,Status,DPD", "Siti,Macet,14");
        let config = AgendaConfig::default();
        let result = composer
            .compose(ComposeRequest {
                customer: &c,
                template: &manual_template("Halo {name}"),
                config: &config,
                today: today(),
            })
            .await
            .unwrap();
        assert_eq!(result.strategy, CommunicationStrategy::CollectionsHard);
    }
}
