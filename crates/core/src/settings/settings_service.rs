use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::constants::APP_CONFIG_SETTING_KEY;
use crate::settings::{
    AppConfig, AppConfigPatch, SettingsRepositoryTrait, SettingsServiceTrait,
};
use crate::Result;

/// Resolves the effective configuration from three layers: compiled-in
/// defaults, deployment overrides (environment), and the remote
/// override record.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
    deployment_overrides: AppConfigPatch,
}

impl SettingsService {
    pub fn new(
        repository: Arc<dyn SettingsRepositoryTrait>,
        deployment_overrides: AppConfigPatch,
    ) -> Self {
        Self {
            repository,
            deployment_overrides,
        }
    }

    /// Fetches the remote override patch. A missing record, a backend
    /// failure or an unparseable payload all degrade to no overrides.
    async fn remote_overrides(&self) -> AppConfigPatch {
        let raw = match self.repository.get_setting(APP_CONFIG_SETTING_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to load remote config overrides: {e}");
                return AppConfigPatch::default();
            }
        };
        match raw {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed remote config record: {e}");
                AppConfigPatch::default()
            }),
            None => AppConfigPatch::default(),
        }
    }

    fn resolve(&self, remote: &AppConfigPatch) -> AppConfig {
        let mut config = AppConfig::default();
        self.deployment_overrides.apply_to(&mut config);
        remote.apply_to(&mut config);
        config
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn get_config(&self) -> Result<AppConfig> {
        let remote = self.remote_overrides().await;
        Ok(self.resolve(&remote))
    }

    async fn update_config(&self, patch: AppConfigPatch) -> Result<AppConfig> {
        let merged = self.remote_overrides().await.merge(&patch);
        let raw = serde_json::to_string(&merged)?;
        self.repository
            .put_setting(APP_CONFIG_SETTING_KEY, &raw)
            .await?;
        Ok(self.resolve(&merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, StoreError};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeRepo {
        value: Mutex<Option<String>>,
        fail: bool,
    }

    #[async_trait]
    impl SettingsRepositoryTrait for FakeRepo {
        async fn get_setting(&self, _key: &str) -> Result<Option<String>> {
            if self.fail {
                return Err(Error::Store(StoreError::ConnectionFailed(
                    "offline".to_string(),
                )));
            }
            Ok(self.value.lock().unwrap().clone())
        }

        async fn put_setting(&self, _key: &str, value: &str) -> Result<()> {
            *self.value.lock().unwrap() = Some(value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_defaults_when_no_overrides() {
        let service = SettingsService::new(
            Arc::new(FakeRepo::default()),
            AppConfigPatch::default(),
        );
        let config = service.get_config().await.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.show_hero_section);
        assert_eq!(config.prs_threshold_days, 1);
    }

    #[tokio::test]
    async fn test_remote_overrides_win_over_deployment() {
        let repo = Arc::new(FakeRepo::default());
        *repo.value.lock().unwrap() =
            Some(r#"{"prsThresholdDays": 3}"#.to_string());
        let service = SettingsService::new(
            repo,
            AppConfigPatch {
                prs_threshold_days: Some(2),
                debug_mode: Some(true),
                ..Default::default()
            },
        );
        let config = service.get_config().await.unwrap();
        assert_eq!(config.prs_threshold_days, 3);
        assert!(config.debug_mode);
    }

    #[tokio::test]
    async fn test_backend_failure_degrades_to_defaults() {
        let service = SettingsService::new(
            Arc::new(FakeRepo {
                fail: true,
                ..Default::default()
            }),
            AppConfigPatch::default(),
        );
        let config = service.get_config().await.unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn test_update_merges_with_existing_remote_patch() {
        let repo = Arc::new(FakeRepo::default());
        *repo.value.lock().unwrap() =
            Some(r#"{"showStatsCards": false}"#.to_string());
        let service = SettingsService::new(repo.clone(), AppConfigPatch::default());
        let config = service
            .update_config(AppConfigPatch {
                refinancing_lookahead_months: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!config.show_stats_cards);
        assert_eq!(config.refinancing_lookahead_months, 2);

        let stored: AppConfigPatch =
            serde_json::from_str(repo.value.lock().unwrap().as_ref().unwrap()).unwrap();
        assert_eq!(stored.show_stats_cards, Some(false));
        assert_eq!(stored.refinancing_lookahead_months, Some(2));
    }

    #[test]
    fn test_agenda_config_carries_knobs() {
        let mut config = AppConfig::default();
        config.prs_threshold_days = 5;
        config.refinancing_lookahead_months = 2;
        let agenda = config.agenda_config();
        assert_eq!(agenda.prs_threshold_days, 5);
        assert_eq!(agenda.refinancing_lookahead_months, 2);
    }
}
