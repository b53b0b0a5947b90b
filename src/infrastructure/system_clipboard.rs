//! OS clipboard backed by `arboard`.

use crate::domain::gateways::{Clipboard, ClipboardError};
use async_trait::async_trait;
use tracing::debug;

/// Writes to the desktop clipboard.
///
/// A fresh handle is opened per write on a blocking thread. On X11 the
/// contents are only kept while a clipboard manager is running.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
            debug!("Clipboard updated");
            Ok(())
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }
}
