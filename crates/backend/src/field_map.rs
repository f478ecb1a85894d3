//! Backend repository for per-tenant field-mapping overrides.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use sentra_core::customers::{FieldMapOverrides, FieldMapRepositoryTrait};
use sentra_core::errors::{Result, StoreError};
use sentra_core::settings::SettingsRepositoryTrait;

use crate::client::RestClient;
use crate::settings::SettingsRepository;

const FIELD_MAP_SETTING_KEY: &str = "field_map_overrides";

/// Stores the header-keyword overrides as one JSON record in the same
/// key/value table the settings use.
pub struct FieldMapRepository {
    settings: SettingsRepository,
}

impl FieldMapRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            settings: SettingsRepository::new(client),
        }
    }
}

#[async_trait]
impl FieldMapRepositoryTrait for FieldMapRepository {
    async fn get_field_map(&self) -> Result<Option<FieldMapOverrides>> {
        let raw = self.settings.get_setting(FIELD_MAP_SETTING_KEY).await?;
        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(overrides) => Ok(Some(overrides)),
                Err(e) => {
                    // A corrupt record must not take customer sync down;
                    // the caller falls back to default keywords.
                    warn!("Ignoring malformed field map record: {e}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn put_field_map(&self, overrides: &FieldMapOverrides) -> Result<()> {
        let raw = serde_json::to_string(overrides)
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        self.settings.put_setting(FIELD_MAP_SETTING_KEY, &raw).await
    }
}
