//! Click analytics flow.

use std::sync::Arc;

use crate::domain::gateways::ShortenerApi;
use crate::error::ErrorKind;
use crate::utils::timestamp::format_created_at;
use crate::view::{AnalyticsPanel, AnalyticsSummary, View};

/// Fetches and renders analytics for a short code.
pub struct AnalyticsService<A: ShortenerApi, V: View> {
    api: Arc<A>,
    view: Arc<V>,
}

impl<A: ShortenerApi, V: View> AnalyticsService<A, V> {
    /// Creates a new analytics service.
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self { api, view }
    }

    /// Shows the loading placeholder, requests analytics and renders the
    /// outcome in the analytics area.
    ///
    /// Failures are rendered inline and never returned: a non-2xx response
    /// yields [`AnalyticsPanel::Rejected`], anything else
    /// [`AnalyticsPanel::Unreachable`]. The rendered panel is returned.
    pub async fn fetch(&self, short_code: &str) -> AnalyticsPanel {
        self.view.render_analytics(&AnalyticsPanel::Loading);

        let panel = match self.api.stats(short_code).await {
            Ok(stats) => AnalyticsPanel::Ready(AnalyticsSummary {
                short_code: stats.short_code.unwrap_or_else(|| short_code.to_string()),
                clicks: stats.clicks,
                created_at: format_created_at(&stats.created_at),
                original_url: stats.original_url,
            }),
            Err(e) if e.kind() == ErrorKind::Server => {
                tracing::debug!(short_code, error = %e, "Analytics rejected");
                AnalyticsPanel::Rejected
            }
            Err(e) => {
                tracing::debug!(short_code, error = %e, "Analytics unavailable");
                AnalyticsPanel::Unreachable
            }
        };

        self.view.render_analytics(&panel);
        panel
    }
}
