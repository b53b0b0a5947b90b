//! HTTP implementation of the shortening service gateway.

use crate::api::dto::health::HealthResponse;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::dto::stats::StatsResponse;
use crate::api::{SHORTEN_SEGMENT, STATS_SEGMENT};
use crate::domain::gateways::ShortenerApi;
use crate::error::ClientError;
use crate::utils::base_url::parse_base_url;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// reqwest-backed client for the shortening service.
///
/// Requests are sent once; there is no timeout or retry. A hung request
/// keeps the caller waiting.
#[derive(Debug, Clone)]
pub struct HttpShortenerClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpShortenerClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the address is not an
    /// absolute HTTP(S) URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing connection pool.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            parse_base_url(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decodes a response body.
///
/// The body is read as JSON before the status is inspected, so an error
/// response that is not JSON counts as a connectivity failure.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        return Err(ClientError::from_response_body(status.as_u16(), &body));
    }

    serde_json::from_value(body)
        .map_err(|e| ClientError::Connectivity(format!("Unexpected response body: {}", e)))
}

fn log_failure(operation: &str, result: &Result<impl Sized, ClientError>) {
    if let Err(e) = result {
        warn!(operation, error = %e, "Shortener request failed");
    }
}

#[async_trait]
impl ShortenerApi for HttpShortenerClient {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError> {
        let url = self.endpoint(&[SHORTEN_SEGMENT])?;
        debug!(%url, long_url = %request.long_url, "POST shorten");

        let result = match self.client.post(url).json(request).send().await {
            Ok(response) => decode(response).await,
            Err(e) => Err(e.into()),
        };
        log_failure("shorten", &result);
        result
    }

    async fn stats(&self, short_code: &str) -> Result<StatsResponse, ClientError> {
        let url = self.endpoint(&[STATS_SEGMENT, short_code])?;
        debug!(%url, "GET stats");

        let result = match self.client.get(url).send().await {
            Ok(response) => decode(response).await,
            Err(e) => Err(e.into()),
        };
        log_failure("stats", &result);
        result
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.base_url.clone();
        debug!(%url, "GET health");

        let result = match self.client.get(url).send().await {
            Ok(response) => decode(response).await,
            Err(e) => Err(e.into()),
        };
        log_failure("health", &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpShortenerClient::new("localhost:8000");
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_endpoint_on_root() {
        let client = HttpShortenerClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            client.endpoint(&[SHORTEN_SEGMENT]).unwrap().as_str(),
            "http://127.0.0.1:8000/shorten"
        );
        assert_eq!(
            client.endpoint(&[STATS_SEGMENT, "promo"]).unwrap().as_str(),
            "http://127.0.0.1:8000/stats/promo"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client = HttpShortenerClient::new("https://short.example.com/api/").unwrap();
        assert_eq!(
            client.endpoint(&[STATS_SEGMENT, "promo"]).unwrap().as_str(),
            "https://short.example.com/api/stats/promo"
        );
    }

    #[test]
    fn test_short_code_is_one_segment() {
        let client = HttpShortenerClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            client.endpoint(&[STATS_SEGMENT, "../admin"]).unwrap().as_str(),
            "http://127.0.0.1:8000/stats/..%2Fadmin"
        );
    }
}
