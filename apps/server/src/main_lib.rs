use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use sentra_ai::{GenerativeClient, HttpGenerativeClient, MessageComposer, MessageComposerTrait};
use sentra_backend::{FieldMapRepository, RestClient, SettingsRepository, TemplateRepository};
use sentra_core::{
    agenda::{AgendaService, AgendaServiceTrait},
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    customers::{CustomerService, CustomerServiceTrait, FieldMapOverrides, FieldMapRepositoryTrait},
    errors::{Result as CoreResult, StoreError},
    settings::{AppConfig, SettingsRepositoryTrait, SettingsService, SettingsServiceTrait},
    templates::{MessageTemplate, TemplateRepositoryTrait, TemplateService, TemplateServiceTrait},
    plans::{PlanService, PlanServiceTrait},
};
use sentra_sheets::{CsvExportClient, SheetFetcher, SheetTab, SheetWriter, WebhookWriter};

pub struct AppState {
    pub customer_service: Arc<dyn CustomerServiceTrait>,
    pub agenda_service: Arc<dyn AgendaServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub plan_service: Arc<dyn PlanServiceTrait>,
    pub template_service: Arc<dyn TemplateServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub composer: Arc<dyn MessageComposerTrait>,
    /// The resolved configuration, swapped wholesale on refresh.
    pub app_config: Arc<RwLock<AppConfig>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SENTRA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let export_url = format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
        config.sheet_id
    );
    let fetcher: Arc<dyn SheetFetcher> = Arc::new(CsvExportClient::new(export_url));
    let writer: Arc<dyn SheetWriter> = Arc::new(WebhookWriter::new(config.webhook_url.clone()));

    // Backend repositories. Without a backend URL the app still serves
    // reads (built-in templates, default config); writes surface errors.
    let (template_repo, settings_repo, field_map_repo): (
        Arc<dyn TemplateRepositoryTrait>,
        Arc<dyn SettingsRepositoryTrait>,
        Arc<dyn FieldMapRepositoryTrait>,
    ) = match &config.backend_url {
        Some(url) => {
            let client = Arc::new(RestClient::new(url.clone(), config.backend_api_key.clone()));
            (
                Arc::new(TemplateRepository::new(client.clone())),
                Arc::new(SettingsRepository::new(client.clone())),
                Arc::new(FieldMapRepository::new(client)),
            )
        }
        None => {
            tracing::warn!("No backend configured; templates and settings are read-only");
            (
                Arc::new(OfflineRepository),
                Arc::new(OfflineRepository),
                Arc::new(OfflineRepository),
            )
        }
    };

    let customer_service: Arc<dyn CustomerServiceTrait> = Arc::new(CustomerService::new(
        fetcher.clone(),
        writer.clone(),
        field_map_repo,
        SheetTab::new("customers", config.customer_tab_gid.clone()),
    ));
    let agenda_service = Arc::new(AgendaService::new(customer_service.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(customer_service.clone()));
    let plan_service = Arc::new(PlanService::new(
        fetcher,
        writer,
        SheetTab::new("plans", config.plan_tab_gid.clone()),
    ));
    let template_service = Arc::new(TemplateService::new(template_repo));
    let settings_service = Arc::new(SettingsService::new(
        settings_repo,
        config.config_overrides.clone(),
    ));

    let generative_client: Option<Arc<dyn GenerativeClient>> = match &config.ai_api_key {
        Some(key) => Some(Arc::new(HttpGenerativeClient::new(
            config.ai_endpoint.clone(),
            key.clone(),
            config.ai_model.clone(),
        )?)),
        None => {
            tracing::warn!("No AI key configured; AI templates are disabled");
            None
        }
    };
    let composer = Arc::new(MessageComposer::new(generative_client));

    let app_config = Arc::new(RwLock::new(settings_service.get_config().await?));

    Ok(Arc::new(AppState {
        customer_service,
        agenda_service,
        analytics_service,
        plan_service,
        template_service,
        settings_service,
        composer,
        app_config,
    }))
}

/// Stand-in for every backend repository when no backend is configured.
struct OfflineRepository;

#[async_trait]
impl TemplateRepositoryTrait for OfflineRepository {
    async fn list_templates(&self) -> CoreResult<Vec<MessageTemplate>> {
        Ok(Vec::new())
    }

    async fn upsert_template(&self, _template: &MessageTemplate) -> CoreResult<MessageTemplate> {
        Err(StoreError::ConnectionFailed("no backend configured".to_string()).into())
    }

    async fn delete_template(&self, _template_id: &str) -> CoreResult<()> {
        Err(StoreError::ConnectionFailed("no backend configured".to_string()).into())
    }
}

#[async_trait]
impl SettingsRepositoryTrait for OfflineRepository {
    async fn get_setting(&self, _key: &str) -> CoreResult<Option<String>> {
        Ok(None)
    }

    async fn put_setting(&self, _key: &str, _value: &str) -> CoreResult<()> {
        Err(StoreError::ConnectionFailed("no backend configured".to_string()).into())
    }
}

#[async_trait]
impl FieldMapRepositoryTrait for OfflineRepository {
    async fn get_field_map(&self) -> CoreResult<Option<FieldMapOverrides>> {
        Ok(None)
    }

    async fn put_field_map(&self, _overrides: &FieldMapOverrides) -> CoreResult<()> {
        Err(StoreError::ConnectionFailed("no backend configured".to_string()).into())
    }
}
