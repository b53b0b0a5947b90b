//! DTOs for health check endpoint.

use serde::Deserialize;

/// Liveness report returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,

    #[serde(default)]
    pub message: Option<String>,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
