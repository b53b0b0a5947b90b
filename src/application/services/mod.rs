//! Flow services for the application layer.

pub mod analytics_service;
pub mod clipboard_service;
pub mod shorten_service;

pub use analytics_service::AnalyticsService;
pub use clipboard_service::{ClipboardService, CopyOutcome};
pub use shorten_service::ShortenService;
