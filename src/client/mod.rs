//! Analysis service client
//!
//! This module talks to the remote sentiment analysis backend:
//! - `analyze`: submit a Reddit post URL, get back the sentiment summary
//! - `health`: liveness probe against the service

mod analysis;
pub mod mock;
#[cfg(test)]
mod tests;

pub use analysis::AnalysisClient;
pub use mock::MockAnalysisClient;

use crate::error::Result;
use crate::types::AnalysisResult;
use async_trait::async_trait;

/// Client-side view of the analysis service (allows mocking).
///
/// One call issues exactly one outbound request; there is no retrying,
/// caching, or coalescing at this layer.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult>;
}
