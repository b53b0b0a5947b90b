//! Gateway trait for the remote shortening service.

use crate::api::dto::health::HealthResponse;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::dto::stats::StatsResponse;
use crate::error::ClientError;
use async_trait::async_trait;

/// Remote operations offered by the shortening service.
///
/// # Implementations
///
/// - [`crate::infrastructure::HttpShortenerClient`] - HTTP/JSON implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every method returns [`ClientError::Server`] for a non-2xx response and
/// [`ClientError::Connectivity`] when the service cannot be reached or its
/// body cannot be decoded.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Creates a short link.
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError>;

    /// Fetches click analytics for a short code.
    async fn stats(&self, short_code: &str) -> Result<StatsResponse, ClientError>;

    /// Probes service liveness.
    async fn health(&self) -> Result<HealthResponse, ClientError>;
}
