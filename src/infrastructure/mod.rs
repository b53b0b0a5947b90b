//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateways defined by the domain layer.
//!
//! # Modules
//!
//! - [`http_client`] - Shortening service over HTTP/JSON (reqwest)
//! - [`system_clipboard`] - OS clipboard (arboard)

pub mod http_client;
pub mod system_clipboard;

pub use http_client::HttpShortenerClient;
pub use system_clipboard::SystemClipboard;
