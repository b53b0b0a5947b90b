//! Gateway trait for the system clipboard.

use async_trait::async_trait;

/// Failure to place text on the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Destination for copied short URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::SystemClipboard`] - OS clipboard
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
