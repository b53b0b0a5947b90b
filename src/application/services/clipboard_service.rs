//! Copying the last generated short URL.

use std::sync::Arc;

use crate::application::state::SessionState;
use crate::domain::gateways::Clipboard;
use crate::view::{Notice, View};

pub const COPIED_MESSAGE: &str = "Short URL copied!";
pub const COPY_FAILED_MESSAGE: &str = "Copy failed";

/// Result of a copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing has been shortened yet; the clipboard was not touched.
    Skipped,
    Copied,
    Failed,
}

/// Writes the cached short URL to the clipboard.
pub struct ClipboardService<C: Clipboard, V: View> {
    clipboard: Arc<C>,
    view: Arc<V>,
}

impl<C: Clipboard, V: View> ClipboardService<C, V> {
    /// Creates a new clipboard service.
    pub fn new(clipboard: Arc<C>, view: Arc<V>) -> Self {
        Self { clipboard, view }
    }

    /// Copies `state`'s last short URL and acknowledges the result.
    ///
    /// Does nothing, not even an alert, when no URL has been generated.
    pub async fn copy(&self, state: &SessionState) -> CopyOutcome {
        let Some(short_url) = state.last_short_url() else {
            return CopyOutcome::Skipped;
        };

        match self.clipboard.write_text(short_url).await {
            Ok(()) => {
                self.view.alert(&Notice::success(COPIED_MESSAGE));
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!("Failed to copy short URL: {}", e);
                self.view.alert(&Notice::error(COPY_FAILED_MESSAGE));
                CopyOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::{ClipboardError, MockClipboard};
    use crate::view::MockView;

    #[tokio::test]
    async fn test_copy_without_short_url_is_noop() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().times(0);

        let mut view = MockView::new();
        view.expect_alert().times(0);

        let service = ClipboardService::new(Arc::new(clipboard), Arc::new(view));
        let outcome = service.copy(&SessionState::new()).await;

        assert_eq!(outcome, CopyOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_copy_writes_exact_short_url() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == "http://127.0.0.1:8000/promo")
            .times(1)
            .returning(|_| Ok(()));

        let mut view = MockView::new();
        view.expect_alert()
            .withf(|notice| !notice.is_error() && notice.message() == COPIED_MESSAGE)
            .times(1)
            .return_const(());

        let service = ClipboardService::new(Arc::new(clipboard), Arc::new(view));
        let mut state = SessionState::new();
        state.remember_short_url("http://127.0.0.1:8000/promo");

        assert_eq!(service.copy(&state).await, CopyOutcome::Copied);
    }

    #[tokio::test]
    async fn test_copy_failure_is_acknowledged() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .times(1)
            .returning(|_| Err(ClipboardError::Unavailable("no display".to_string())));

        let mut view = MockView::new();
        view.expect_alert()
            .withf(|notice| notice.is_error() && notice.message() == COPY_FAILED_MESSAGE)
            .times(1)
            .return_const(());

        let service = ClipboardService::new(Arc::new(clipboard), Arc::new(view));
        let mut state = SessionState::new();
        state.remember_short_url("http://127.0.0.1:8000/promo");

        assert_eq!(service.copy(&state).await, CopyOutcome::Failed);
    }
}
