//! HTTP row source for PostgREST-style table endpoints.
//!
//! The rest of the application only sees [`RowSource`]: one operation that
//! selects the text column from the configured table, no filter, no
//! pagination. [`TableClient`] is the production implementation.

use crate::config::SourceConfig;
use crate::fetch::loader::MessageRow;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no source endpoint configured (set [source] endpoint in config.toml)")]
    Unconfigured,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// A collaborator that retrieves all message rows.
pub trait RowSource: Send + Sync + 'static {
    fn fetch_rows(&self) -> impl Future<Output = Result<Vec<MessageRow>, FetchError>> + Send;
}

/// Reads rows from a hosted table over the PostgREST API
/// (`GET {endpoint}/rest/v1/{table}?select={column}`).
#[derive(Clone)]
pub struct TableClient {
    http: Client,
    endpoint: String,
    api_key: String,
    table: String,
    column: String,
}

impl TableClient {
    pub fn new(cfg: &SourceConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            table: cfg.table.clone(),
            column: cfg.column.clone(),
        }
    }

    fn rows_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select={}",
            self.endpoint, self.table, self.column
        )
    }
}

impl RowSource for TableClient {
    async fn fetch_rows(&self) -> Result<Vec<MessageRow>, FetchError> {
        if self.endpoint.is_empty() {
            return Err(FetchError::Unconfigured);
        }

        let mut request = self.http.get(self.rows_url());
        if !self.api_key.is_empty() {
            request = request
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        rows_from_body(&body, &self.column)
    }
}

/// Decode the response body into rows. The body must be a JSON array of
/// records; a missing or null column value renders as the empty string.
pub(crate) fn rows_from_body(body: &Value, column: &str) -> Result<Vec<MessageRow>, FetchError> {
    let records = body
        .as_array()
        .ok_or_else(|| FetchError::Decode("expected a JSON array of records".to_string()))?;

    Ok(records
        .iter()
        .map(|record| {
            let text = match record.get(column) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            MessageRow { text }
        })
        .collect())
}
