//! CSV-export reads from the spreadsheet.

use async_trait::async_trait;
use chrono::Utc;
use log::warn;

use crate::errors::SheetError;

/// A named tab of the source spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetTab {
    /// Human-readable tab name, used in logs and errors.
    pub name: String,
    /// The `gid` query parameter identifying the tab in the export URL.
    pub gid: String,
}

impl SheetTab {
    pub fn new(name: impl Into<String>, gid: impl Into<String>) -> Self {
        Self { name: name.into(), gid: gid.into() }
    }
}

/// Trait for fetching the raw CSV text of a sheet tab.
#[async_trait]
pub trait SheetFetcher: Send + Sync {
    /// Fetches one tab as CSV text (first row = headers, quoted-field
    /// escaping). Implementations must not cache across calls.
    async fn fetch_tab(&self, tab: &SheetTab) -> Result<String, SheetError>;
}

/// Fetcher backed by the spreadsheet's public CSV-export URL.
///
/// Every request carries a fresh cache-busting parameter so intermediate
/// caches never serve a stale export. One automatic retry is applied to
/// retryable errors; this is the only retry policy in the system.
pub struct CsvExportClient {
    client: reqwest::Client,
    export_url: String,
}

impl CsvExportClient {
    /// `export_url` is the per-spreadsheet CSV export base, e.g.
    /// `https://docs.google.com/spreadsheets/d/<id>/export?format=csv`.
    pub fn new(export_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            export_url: export_url.into(),
        }
    }

    fn tab_url(&self, tab: &SheetTab) -> String {
        let separator = if self.export_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}gid={}&t={}",
            self.export_url,
            separator,
            tab.gid,
            Utc::now().timestamp_millis()
        )
    }

    async fn fetch_once(&self, tab: &SheetTab) -> Result<String, SheetError> {
        let url = self.tab_url(tab);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SheetError::RequestFailed {
                tab: tab.name.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::BadStatus {
                tab: tab.name.clone(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SheetError::BodyRead(e.to_string()))
    }
}

#[async_trait]
impl SheetFetcher for CsvExportClient {
    async fn fetch_tab(&self, tab: &SheetTab) -> Result<String, SheetError> {
        match self.fetch_once(tab).await {
            Ok(text) => Ok(text),
            Err(first) if first.retryable() => {
                warn!("Fetch of tab '{}' failed ({}), retrying once", tab.name, first);
                self.fetch_once(tab).await
            }
            Err(e) => Err(e),
        }
    }
}
