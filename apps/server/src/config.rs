//! Server configuration from environment variables.

use sentra_core::settings::AppConfigPatch;

/// Everything the server needs to wire itself up. Read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,

    // Spreadsheet collaborator
    pub sheet_id: String,
    pub customer_tab_gid: String,
    pub plan_tab_gid: String,
    pub webhook_url: Option<String>,

    // Managed backend
    pub backend_url: Option<String>,
    pub backend_api_key: String,

    // Generative endpoint
    pub ai_endpoint: String,
    pub ai_api_key: Option<String>,
    pub ai_model: String,

    /// Configuration overrides pinned by the deployment; remote
    /// overrides still win over these.
    pub config_overrides: AppConfigPatch,
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let sheet_id = env_opt("SENTRA_SHEET_ID")
            .ok_or_else(|| anyhow::anyhow!("SENTRA_SHEET_ID must be set"))?;

        let config_overrides = match env_opt("SENTRA_CONFIG_OVERRIDES") {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| anyhow::anyhow!("SENTRA_CONFIG_OVERRIDES is not valid JSON: {e}"))?,
            None => AppConfigPatch::default(),
        };

        Ok(Self {
            listen_addr: env_opt("SENTRA_LISTEN_ADDR")
                .unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            sheet_id,
            customer_tab_gid: env_opt("SENTRA_CUSTOMER_TAB_GID")
                .unwrap_or_else(|| "0".to_string()),
            plan_tab_gid: env_opt("SENTRA_PLAN_TAB_GID").unwrap_or_else(|| "1".to_string()),
            webhook_url: env_opt("SENTRA_WEBHOOK_URL"),
            backend_url: env_opt("SENTRA_BACKEND_URL"),
            backend_api_key: env_opt("SENTRA_BACKEND_API_KEY").unwrap_or_default(),
            ai_endpoint: env_opt("SENTRA_AI_ENDPOINT")
                .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string()),
            ai_api_key: env_opt("SENTRA_AI_API_KEY"),
            ai_model: env_opt("SENTRA_AI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            config_overrides,
        })
    }
}
