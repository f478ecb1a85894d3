//! Webhook writes back to the spreadsheet.

use async_trait::async_trait;
use log::debug;
use serde_json::{json, Value};

use crate::errors::SheetError;

/// Trait for pushing mutations to the spreadsheet side.
#[async_trait]
pub trait SheetWriter: Send + Sync {
    /// Sends one `{ "action": …, …payload }` envelope and awaits the
    /// remote acknowledgment. A non-2xx response is an error.
    async fn post(&self, action: &str, payload: Value) -> Result<(), SheetError>;
}

/// Writer that POSTs JSON envelopes to a user-supplied webhook endpoint.
pub struct WebhookWriter {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl WebhookWriter {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl SheetWriter for WebhookWriter {
    async fn post(&self, action: &str, payload: Value) -> Result<(), SheetError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or_else(|| SheetError::NotConfigured("sheet webhook url".to_string()))?;

        let mut envelope = json!({ "action": action });
        if let (Some(envelope_map), Value::Object(payload_map)) =
            (envelope.as_object_mut(), payload)
        {
            envelope_map.extend(payload_map);
        }

        debug!("Posting webhook action '{}'", action);
        let response = self
            .client
            .post(url)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| SheetError::WebhookFailed {
                action: action.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::WebhookRejected {
                action: action.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
