//! Wire contract with the sentiment analysis service
//!
//! Field names and the lowercase sentiment literals are part of the contract;
//! unknown extra fields in responses are tolerated and ignored.

use serde::{Deserialize, Serialize};

const PROPORTION_TOLERANCE: f64 = 1e-6;

/// Sentiment label attached to a post, a group, or a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Outbound payload of one analysis submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

/// Per-label share of the classified comments. One entry per label actually
/// present in the thread; labels are unique within a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentGroup {
    pub label: Sentiment,
    pub count: u64,
    pub proportion: f64,
}

/// Comment the service surfaced as representative or high-signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotableComment {
    pub comment_id: String,
    pub snippet: String,
    pub sentiment: Sentiment,
    /// Vote signal; sign is meaningful.
    pub score: i64,
}

/// Full sentiment summary for one Reddit post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub post_title: String,
    pub overall_sentiment: Sentiment,
    /// Ordered groups; proportions sum to ~1.0.
    pub groups: Vec<SentimentGroup>,
    /// Disagreement/volatility of sentiment across comments. Computed by the
    /// service; opaque here.
    pub controversy: f64,
    /// Significance-ranked keywords.
    pub keywords: Vec<String>,
    pub notable_comments: Vec<NotableComment>,
}

impl AnalysisResult {
    /// Total comments classified across all sentiment groups.
    pub fn total_comments(&self) -> u64 {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Sum of group proportions. ~1.0 for a well-formed response.
    pub fn proportion_sum(&self) -> f64 {
        self.groups.iter().map(|g| g.proportion).sum()
    }

    /// Whether group proportions sum to 1.0 within float tolerance.
    pub fn proportions_consistent(&self) -> bool {
        self.groups.is_empty() || (self.proportion_sum() - 1.0).abs() < PROPORTION_TOLERANCE
    }
}
