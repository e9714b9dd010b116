use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use sf_core::{ArticleSource, Error, FetchError, Page, RawBatch, ResourceKind, Result};
use tracing::{debug, error};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.spaceflightnewsapi.net/v4";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Spaceflight News API v4 client. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct SpaceflightClient {
    client: Client,
    base_url: Url,
}

impl SpaceflightClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("Base URL cannot have paths: {}", base_url)));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{kind}/?limit=&offset=`, or `{base}/info/` for metadata.
    pub fn endpoint(&self, kind: ResourceKind, limit: u32, offset: u32) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(kind.path()).push("");
        }
        if kind.is_paginated() {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string())
                .append_pair("offset", &offset.to_string());
        }
        url
    }
}

#[async_trait]
impl ArticleSource for SpaceflightClient {
    fn name(&self) -> &str {
        "Spaceflight News API"
    }

    async fn fetch(
        &self,
        kind: ResourceKind,
        limit: u32,
        offset: u32,
    ) -> std::result::Result<RawBatch, FetchError> {
        let url = self.endpoint(kind, limit, offset);
        debug!(url = %url, "Requesting upstream");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_failure(&url, describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {}>", e),
            };
            error!(url = %url, status = status.as_u16(), body = %body, "Upstream request failed");
            return Err(FetchError::UpstreamStatus {
                code: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_failure(&url, describe(&e)))?;

        let batch = if kind.is_paginated() {
            serde_json::from_slice::<Page>(&bytes).map(RawBatch::Page)
        } else {
            serde_json::from_slice::<Value>(&bytes).map(RawBatch::Info)
        };
        batch.map_err(|e| transport_failure(&url, format!("invalid response body: {}", e)))
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}

fn transport_failure(url: &Url, detail: String) -> FetchError {
    error!(url = %url, detail = %detail, "Upstream unreachable");
    FetchError::Transport { detail }
}
