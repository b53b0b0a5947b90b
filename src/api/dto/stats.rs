//! DTOs for link analytics.

use serde::Deserialize;

/// Analytics for a single short link.
///
/// `created_at` is kept as the raw string sent by the service; formatting
/// happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsResponse {
    pub clicks: i64,
    pub created_at: String,

    #[serde(default)]
    pub short_code: Option<String>,

    #[serde(default)]
    pub original_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_stats() {
        let stats: StatsResponse = serde_json::from_str(
            r#"{
                "short_code": "promo",
                "original_url": "https://example.com",
                "clicks": 42,
                "created_at": "2024-01-15T14:30:00.123456"
            }"#,
        )
        .unwrap();

        assert_eq!(stats.clicks, 42);
        assert_eq!(stats.created_at, "2024-01-15T14:30:00.123456");
        assert_eq!(stats.short_code.as_deref(), Some("promo"));
        assert_eq!(stats.original_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_deserialize_minimal_stats() {
        let stats: StatsResponse =
            serde_json::from_str(r#"{"clicks": 0, "created_at": "2024-01-15T14:30:00"}"#).unwrap();

        assert_eq!(stats.clicks, 0);
        assert!(stats.short_code.is_none());
        assert!(stats.original_url.is_none());
    }

    #[test]
    fn test_missing_clicks_is_rejected() {
        let result = serde_json::from_str::<StatsResponse>(r#"{"created_at": "2024-01-15"}"#);
        assert!(result.is_err());
    }
}
