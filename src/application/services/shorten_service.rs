//! Link shortening flow.

use std::sync::Arc;

use crate::api::dto::shorten::ShortenResponse;
use crate::application::services::AnalyticsService;
use crate::application::state::SessionState;
use crate::domain::ShortenForm;
use crate::domain::gateways::ShortenerApi;
use crate::error::ClientError;
use crate::utils::short_code::short_code_from_url;
use crate::view::{Notice, ResultCard, View};

/// Submits the shortening form and renders the result.
///
/// A successful submission chains into [`AnalyticsService::fetch`] for the
/// new short code.
pub struct ShortenService<A: ShortenerApi, V: View> {
    api: Arc<A>,
    view: Arc<V>,
    analytics: AnalyticsService<A, V>,
}

impl<A: ShortenerApi, V: View> ShortenService<A, V> {
    /// Creates a new shortening service.
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        let analytics = AnalyticsService::new(api.clone(), view.clone());
        Self {
            api,
            view,
            analytics,
        }
    }

    /// Analytics flow sharing this service's gateway and view.
    pub fn analytics(&self) -> &AnalyticsService<A, V> {
        &self.analytics
    }

    /// Submits the form.
    ///
    /// # Flow
    ///
    /// 1. Build the request; an empty URL alerts and stops before any request
    /// 2. Send it to the shortening endpoint
    /// 3. On success, reveal the result card and remember the short URL
    /// 4. Fetch analytics for the last path segment of the short URL
    ///
    /// On failure the error message is alerted and the result card and
    /// `state` stay untouched.
    ///
    /// # Errors
    ///
    /// Returns the error that was alerted, so callers can report an exit
    /// status. No further handling is expected.
    pub async fn submit(
        &self,
        form: &ShortenForm,
        state: &mut SessionState,
    ) -> Result<ShortenResponse, ClientError> {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.view.alert(&Notice::error(e.user_message()));
                return Err(e);
            }
        };

        let response = match self.api.shorten(&request).await {
            Ok(response) => response,
            Err(e) => {
                self.view.alert(&Notice::error(e.user_message()));
                return Err(e);
            }
        };

        tracing::info!(short_url = %response.short_url, "Short URL created");

        self.view
            .show_result(&ResultCard::for_short_url(&response.short_url));
        state.remember_short_url(response.short_url.clone());

        let short_code = short_code_from_url(&response.short_url);
        self.analytics.fetch(short_code).await;

        Ok(response)
    }
}
