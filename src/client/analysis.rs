//! HTTP client for the sentiment analysis service.

use crate::client::AnalysisApi;
use crate::error::{AnalysisError, Result};
use crate::types::{AnalysisRequest, AnalysisResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Analysis service client. The endpoint is injected at construction so
/// callers (and tests) decide where requests go.
pub struct AnalysisClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

impl AnalysisClient {
    /// Create a new client against the configured service address.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Probe the service's health endpoint.
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/api/health", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(AnalysisError::Request(failure_message(status, &body)));
        }

        let health: HealthBody =
            serde_json::from_str(&body).map_err(|e| AnalysisError::Parse(e.to_string()))?;
        if health.status != "ok" {
            return Err(AnalysisError::Request(format!(
                "Analysis service reported status {:?}",
                health.status
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        let endpoint = format!("{}/api/analyze", self.base_url);
        let payload = AnalysisRequest {
            url: url.to_string(),
        };

        let resp = self
            .http
            .post(&endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(AnalysisError::Request(failure_message(status, &body)));
        }

        let result = parse_result(&body)?;
        if !result.proportions_consistent() {
            tracing::warn!(
                sum = result.proportion_sum(),
                "group proportions do not sum to 1.0"
            );
        }
        Ok(result)
    }
}

/// Parse a success body into the typed result.
pub(crate) fn parse_result(body: &str) -> Result<AnalysisResult> {
    serde_json::from_str(body).map_err(|e| AnalysisError::Parse(e.to_string()))
}

/// Human-readable message for a failure response. Prefers the service's
/// `detail` field; falls back to text carrying the numeric status code when
/// the body is absent, malformed, or blank.
pub(crate) fn failure_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("Analysis service returned status {}", status.as_u16()))
}
