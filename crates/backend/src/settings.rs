//! Backend repository for the key/value settings store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use sentra_core::errors::{Result, StoreError};
use sentra_core::settings::SettingsRepositoryTrait;

use crate::client::{eq_filter, RestClient};

const TABLE: &str = "app_settings";

pub struct SettingsRepository {
    client: Arc<RestClient>,
}

impl SettingsRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    async fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let query = format!("{}&select=setting_value", eq_filter("setting_key", key));
        let rows = self.client.select(TABLE, &query).await?;
        match rows.first() {
            Some(row) => {
                let value = row
                    .get("setting_value")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        StoreError::QueryFailed(format!("{TABLE}: bad row for key '{key}'"))
                    })?;
                Ok(Some(value.to_string()))
            }
            None => Ok(None),
        }
    }

    async fn put_setting(&self, key: &str, value: &str) -> Result<()> {
        self.client
            .upsert(
                TABLE,
                json!({ "setting_key": key, "setting_value": value }),
            )
            .await?;
        Ok(())
    }
}
