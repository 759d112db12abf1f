//! Mock analysis client for testing
//!
//! Scripted responses without network calls, mirroring the outcomes the real
//! client can produce: a parsed result, any failure kind, optional latency.

use crate::client::AnalysisApi;
use crate::error::{AnalysisError, Result};
use crate::types::{AnalysisResult, NotableComment, Sentiment, SentimentGroup};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock client with scripted outcomes and a shared call counter.
pub struct MockAnalysisClient {
    result: AnalysisResult,
    failure: Option<AnalysisError>,
    latency_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self {
            result: default_result(),
            failure: None,
            latency_ms: 0,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_result(mut self, result: AnalysisResult) -> Self {
        self.result = result;
        self
    }

    pub fn with_failure(mut self, failure: AnalysisError) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency_ms = ms;
        self
    }

    /// Shared counter of `analyze` invocations. Keep a handle before moving
    /// the client into a controller.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisApi for MockAnalysisClient {
    async fn analyze(&self, _url: &str) -> Result<AnalysisResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
        }
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        Ok(self.result.clone())
    }
}

/// Canned response: a mostly positive thread with one notable comment.
pub fn default_result() -> AnalysisResult {
    AnalysisResult {
        post_title: "Test Post".to_string(),
        overall_sentiment: Sentiment::Positive,
        groups: vec![
            SentimentGroup {
                label: Sentiment::Positive,
                count: 8,
                proportion: 0.8,
            },
            SentimentGroup {
                label: Sentiment::Negative,
                count: 2,
                proportion: 0.2,
            },
        ],
        controversy: 0.35,
        keywords: vec!["great".to_string(), "useful".to_string()],
        notable_comments: vec![NotableComment {
            comment_id: "c1".to_string(),
            snippet: "Loved it".to_string(),
            sentiment: Sentiment::Positive,
            score: 42,
        }],
    }
}
