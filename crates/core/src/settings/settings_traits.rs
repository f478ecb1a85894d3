use async_trait::async_trait;

use crate::settings::{AppConfig, AppConfigPatch};
use crate::Result;

/// Key/value settings store, backed by the remote backend.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    async fn get_setting(&self, key: &str) -> Result<Option<String>>;
    async fn put_setting(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Resolves the effective configuration: defaults, then deployment
    /// overrides, then remote overrides.
    async fn get_config(&self) -> Result<AppConfig>;

    /// Persists a patch to the remote override layer and returns the
    /// newly resolved configuration.
    async fn update_config(&self, patch: AppConfigPatch) -> Result<AppConfig>;
}
