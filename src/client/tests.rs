//! Tests for client module

#[cfg(test)]
mod tests {
    use crate::client::analysis::{failure_message, parse_result};
    use crate::client::mock::default_result;
    use crate::error::AnalysisError;
    use crate::types::Sentiment;
    use reqwest::StatusCode;

    const SUCCESS_BODY: &str = r#"{
        "post_title": "Test Post",
        "overall_sentiment": "positive",
        "groups": [
            {"label": "positive", "count": 8, "proportion": 0.8},
            {"label": "negative", "count": 2, "proportion": 0.2}
        ],
        "controversy": 0.35,
        "keywords": ["great", "useful"],
        "notable_comments": [
            {"comment_id": "c1", "snippet": "Loved it", "sentiment": "positive", "score": 42}
        ]
    }"#;

    #[test]
    fn test_parse_success_body() {
        let result = parse_result(SUCCESS_BODY).unwrap();
        assert_eq!(result, default_result());
        assert_eq!(result.overall_sentiment, Sentiment::Positive);
        assert_eq!(result.total_comments(), 10);
    }

    #[test]
    fn test_parse_tolerates_unknown_fields() {
        let body = r#"{
            "post_title": "T",
            "overall_sentiment": "neutral",
            "groups": [],
            "controversy": 0.0,
            "keywords": [],
            "notable_comments": [],
            "elapsed_ms": 1234
        }"#;
        let result = parse_result(body).unwrap();
        assert_eq!(result.overall_sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        // overall_sentiment absent
        let body = r#"{
            "post_title": "T",
            "groups": [],
            "controversy": 0.0,
            "keywords": [],
            "notable_comments": []
        }"#;
        let err = parse_result(body).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
        assert!(err.to_string().contains("overall_sentiment"));
    }

    #[test]
    fn test_unknown_sentiment_literal_is_parse_error() {
        let body = r#"{
            "post_title": "T",
            "overall_sentiment": "mixed",
            "groups": [],
            "controversy": 0.0,
            "keywords": [],
            "notable_comments": []
        }"#;
        let err = parse_result(body).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[test]
    fn test_non_numeric_count_is_parse_error() {
        let body = r#"{
            "post_title": "T",
            "overall_sentiment": "positive",
            "groups": [{"label": "positive", "count": "eight", "proportion": 1.0}],
            "controversy": 0.0,
            "keywords": [],
            "notable_comments": []
        }"#;
        let err = parse_result(body).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[test]
    fn test_failure_message_prefers_detail() {
        let message = failure_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": "Invalid Reddit URL"}"#,
        );
        assert_eq!(message, "Invalid Reddit URL");
    }

    #[test]
    fn test_failure_message_falls_back_on_malformed_body() {
        let message = failure_message(StatusCode::BAD_GATEWAY, "<html>upstream exploded</html>");
        assert_eq!(message, "Analysis service returned status 502");
    }

    #[test]
    fn test_failure_message_falls_back_on_missing_detail() {
        let message = failure_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "boom"}"#);
        assert_eq!(message, "Analysis service returned status 500");
    }

    #[test]
    fn test_failure_message_falls_back_on_blank_detail() {
        let message = failure_message(StatusCode::NOT_FOUND, r#"{"detail": "  "}"#);
        assert_eq!(message, "Analysis service returned status 404");
    }
}
