//! Thin HTTP client for the PostgREST-style backend API.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde_json::Value;

use sentra_core::errors::StoreError;

const REST_PATH: &str = "rest/v1";

/// Client for one backend project. Cheap to clone; repositories share it
/// behind an `Arc`.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/{}/{}", self.base_url, REST_PATH, table)
        } else {
            format!("{}/{}/{}?{}", self.base_url, REST_PATH, table, query)
        }
    }

    fn headers(&self, prefer: Option<&str>) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| StoreError::Internal(format!("Invalid api key: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| StoreError::Internal(format!("Invalid api key: {e}")))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(prefer) = prefer {
            headers.insert(
                "Prefer",
                HeaderValue::from_str(prefer)
                    .map_err(|e| StoreError::Internal(e.to_string()))?,
            );
        }
        Ok(headers)
    }

    async fn execute(
        &self,
        method: Method,
        table: &str,
        query: &str,
        prefer: Option<&str>,
        body: Option<Value>,
    ) -> Result<Response, StoreError> {
        let url = self.table_url(table, query);
        debug!("Backend request: {method} {url}");
        let mut request = self
            .http
            .request(method, &url)
            .headers(self.headers(prefer)?);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(error_for_status(table, response.status()))
    }

    async fn rows(&self, response: Response, table: &str) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| StoreError::QueryFailed(format!("{table}: bad payload: {e}")))?;
        Ok(rows)
    }

    /// `GET /table?{query}`, returning the matching rows.
    pub async fn select(&self, table: &str, query: &str) -> Result<Vec<Value>, StoreError> {
        let response = self.execute(Method::GET, table, query, None, None).await?;
        self.rows(response, table).await
    }

    /// `POST /table` with merge-on-duplicate semantics, returning the
    /// stored representation.
    pub async fn upsert(&self, table: &str, row: Value) -> Result<Vec<Value>, StoreError> {
        let response = self
            .execute(
                Method::POST,
                table,
                "",
                Some("return=representation,resolution=merge-duplicates"),
                Some(row),
            )
            .await?;
        self.rows(response, table).await
    }

    /// `PATCH /table?{query}`, returning the rows actually updated.
    /// An empty result means no row matched the filter.
    pub async fn update_where(
        &self,
        table: &str,
        query: &str,
        patch: Value,
    ) -> Result<Vec<Value>, StoreError> {
        let response = self
            .execute(
                Method::PATCH,
                table,
                query,
                Some("return=representation"),
                Some(patch),
            )
            .await?;
        self.rows(response, table).await
    }

    /// `DELETE /table?{query}`.
    pub async fn delete_where(&self, table: &str, query: &str) -> Result<(), StoreError> {
        self.execute(Method::DELETE, table, query, None, None)
            .await?;
        Ok(())
    }
}

fn error_for_status(table: &str, status: StatusCode) -> StoreError {
    match status {
        StatusCode::NOT_FOUND => StoreError::NotFound(table.to_string()),
        StatusCode::CONFLICT => StoreError::Conflict(table.to_string()),
        s if s.is_server_error() => {
            StoreError::Internal(format!("{table}: backend returned {s}"))
        }
        s => StoreError::QueryFailed(format!("{table}: backend returned {s}")),
    }
}

/// Builds an `id=eq.{value}` style filter with the value URL-encoded.
pub(crate) fn eq_filter(column: &str, value: &str) -> String {
    format!("{}=eq.{}", column, urlencoding::encode(value))
}
