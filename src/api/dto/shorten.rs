//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// Optional fields are omitted from JSON when `None`, so the service applies
/// its own defaults. `expiry_minutes` is `Some(None)` when an expiry was
/// supplied but held no number, and is then sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub long_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_minutes: Option<Option<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            expiry_minutes: None,
            custom_alias: None,
        }
    }

    pub fn with_expiry_minutes(mut self, minutes: Option<i64>) -> Self {
        self.expiry_minutes = Some(minutes);
        self
    }

    pub fn with_custom_alias(mut self, alias: impl Into<String>) -> Self {
        self.custom_alias = Some(alias.into());
        self
    }
}

/// Successful shortening result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,

    /// Echoed by the service but not relied upon; the code is derived from
    /// `short_url`.
    #[serde(default)]
    pub short_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_fields() {
        let request = ShortenRequest::new("https://example.com");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "long_url": "https://example.com" })
        );
    }

    #[test]
    fn test_request_with_all_fields() {
        let request = ShortenRequest::new("https://example.com")
            .with_expiry_minutes(Some(60))
            .with_custom_alias("promo");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "long_url": "https://example.com",
                "expiry_minutes": 60,
                "custom_alias": "promo"
            })
        );
    }

    #[test]
    fn test_request_with_null_expiry() {
        let request = ShortenRequest::new("https://example.com").with_expiry_minutes(None);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"long_url":"https://example.com","expiry_minutes":null}"#
        );
    }

    #[test]
    fn test_response_without_short_code() {
        let response: ShortenResponse =
            serde_json::from_str(r#"{"short_url": "http://127.0.0.1:8000/promo"}"#).unwrap();
        assert_eq!(response.short_url, "http://127.0.0.1:8000/promo");
        assert!(response.short_code.is_none());
    }
}
