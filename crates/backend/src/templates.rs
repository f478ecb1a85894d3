//! Backend repository for message templates.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use sentra_core::errors::{Result, StoreError};
use sentra_core::templates::{MessageTemplate, TemplateRepositoryTrait};

use crate::client::{eq_filter, RestClient};

const TABLE: &str = "message_templates";

pub struct TemplateRepository {
    client: Arc<RestClient>,
}

impl TemplateRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    fn decode(row: Value) -> Result<MessageTemplate> {
        serde_json::from_value(row)
            .map_err(|e| StoreError::QueryFailed(format!("{TABLE}: bad row: {e}")).into())
    }
}

#[async_trait]
impl TemplateRepositoryTrait for TemplateRepository {
    async fn list_templates(&self) -> Result<Vec<MessageTemplate>> {
        let rows = self.client.select(TABLE, "select=*&order=label.asc").await?;
        rows.into_iter().map(Self::decode).collect()
    }

    async fn upsert_template(&self, template: &MessageTemplate) -> Result<MessageTemplate> {
        let mut next = template.clone();
        next.revision = template.revision + 1;
        let row = serde_json::to_value(&next)
            .map_err(|e| StoreError::Internal(e.to_string()))?;

        if template.revision == 0 {
            // First save: plain insert. A duplicate id surfaces as 409.
            let mut rows = self.client.upsert(TABLE, row).await?;
            return match rows.pop() {
                Some(row) => Self::decode(row),
                None => Err(StoreError::QueryFailed(format!(
                    "{TABLE}: insert returned no representation"
                ))
                .into()),
            };
        }

        // Compare-and-swap: the filter matches only while the stored
        // revision equals the caller's. No matched row means the caller
        // lost the race (or the record was deleted under them).
        let query = format!(
            "{}&revision=eq.{}",
            eq_filter("id", &template.id),
            template.revision
        );
        let mut rows = self.client.update_where(TABLE, &query, row).await?;
        match rows.pop() {
            Some(row) => Self::decode(row),
            None => Err(StoreError::Conflict(format!(
                "template {} changed since revision {}",
                template.id, template.revision
            ))
            .into()),
        }
    }

    async fn delete_template(&self, template_id: &str) -> Result<()> {
        self.client
            .delete_where(TABLE, &eq_filter("id", template_id))
            .await?;
        Ok(())
    }
}
