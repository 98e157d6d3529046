//! HTTP search backend (Elasticsearch-compatible REST API).
//!
//! Drives the standard index endpoints: `HEAD /{index}` for existence,
//! `DELETE /{index}`, `PUT /{index}` with a mapping body, and
//! `POST /_bulk` with an NDJSON payload of index-action/document pairs.

use crate::error::{IndexError, Result};
use crate::{DocumentCollection, IndexSchema, SearchBackend};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

/// Connection settings for [`HttpBackend`].
#[derive(Clone, Debug)]
pub struct HttpBackendConfig {
    /// Server root (e.g., `http://localhost:9200`). Trailing slashes are
    /// stripped.
    pub base_url: String,
    /// Optional basic-auth username.
    pub username: Option<String>,
    /// Optional basic-auth password.
    pub password: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9200".to_string(),
            username: None,
            password: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for an Elasticsearch-compatible search backend.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpBackend")
            .field("base_url", &self.base_url)
            .field("has_auth", &self.username.is_some())
            .finish()
    }
}

impl HttpBackend {
    /// Create a new HTTP backend.
    pub fn new(config: HttpBackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        if config.username.is_some() {
            tracing::info!("using authentication");
        } else {
            tracing::info!("no authentication configured");
        }

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username,
            password: config.password,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn add_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.username {
            Some(user) => req.basic_auth(user, self.password.as_deref()),
            None => req,
        }
    }

    /// Map a reqwest error (network/timeout) to a connectivity error.
    fn map_network_error(e: reqwest::Error) -> IndexError {
        if e.is_timeout() {
            IndexError::connectivity(format!("request timed out: {e}"))
        } else if e.is_connect() {
            IndexError::connectivity(format!("connection failed: {e}"))
        } else {
            IndexError::connectivity(e.to_string())
        }
    }

    /// Read a non-2xx response into a status-plus-body message.
    async fn error_message(resp: reqwest::Response) -> String {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if body.is_empty() {
            format!("status {status}")
        } else {
            format!("status {status}: {body}")
        }
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn ping(&self) -> Result<()> {
        let resp = self
            .add_auth(self.client.get(self.base_url.as_str()))
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(IndexError::connectivity(Self::error_message(resp).await))
        }
    }

    async fn index_exists(&self, index: &str) -> Result<bool> {
        let resp = self
            .add_auth(self.client.head(self.url(index)))
            .send()
            .await
            .map_err(Self::map_network_error)?;

        match resp.status() {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(IndexError::lifecycle(Self::error_message(resp).await)),
        }
    }

    async fn delete_index(&self, index: &str) -> Result<()> {
        let resp = self
            .add_auth(self.client.delete(self.url(index)))
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(IndexError::lifecycle(format!(
                "delete of index '{index}' failed: {}",
                Self::error_message(resp).await
            )))
        }
    }

    async fn create_index(&self, index: &str, schema: &IndexSchema) -> Result<()> {
        let resp = self
            .add_auth(self.client.put(self.url(index)))
            .json(&schema.mapping_body())
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(IndexError::lifecycle(format!(
                "create of index '{index}' failed: {}",
                Self::error_message(resp).await
            )))
        }
    }

    async fn bulk_write(&self, index: &str, docs: &DocumentCollection) -> Result<usize> {
        let mut payload = String::new();
        for (doc_id, doc) in docs {
            let action = serde_json::json!({ "index": { "_index": index, "_id": doc_id } });
            payload.push_str(&action.to_string());
            payload.push('\n');
            let doc_json = serde_json::to_string(doc)
                .map_err(|e| IndexError::bulk_write(format!("document serialization: {e}")))?;
            payload.push_str(&doc_json);
            payload.push('\n');
        }

        let resp = self
            .add_auth(self.client.post(self.url("_bulk")))
            .header("content-type", "application/x-ndjson")
            .body(payload)
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if !resp.status().is_success() {
            return Err(IndexError::bulk_write(Self::error_message(resp).await));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| IndexError::invalid_response(e.to_string()))?;

        // The batch call either succeeds or fails as a whole; a response
        // with its error flag set fails the run without per-item retries.
        if body["errors"].as_bool().unwrap_or(false) {
            let failed = body["items"]
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter(|item| item["index"].get("error").is_some())
                        .count()
                })
                .unwrap_or(0);
            return Err(IndexError::bulk_write(format!(
                "{failed} of {} documents rejected",
                docs.len()
            )));
        }

        Ok(docs.len())
    }
}
