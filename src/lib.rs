//! # URL Shortener Client
//!
//! A terminal client for a URL shortening service: shorten a link, copy the
//! result to the clipboard and look at its click analytics.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as the service it talks to:
//!
//! - **API Layer** ([`api`]) - Wire DTOs and endpoint paths
//! - **Domain Layer** ([`domain`]) - Form input and gateway traits
//! - **Application Layer** ([`application`]) - Shorten, analytics and copy flows
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest and clipboard implementations
//! - **View Layer** ([`view`]) - Typed view model and terminal rendering
//!
//! ## Flows
//!
//! - Shorten: validate the form, `POST /shorten`, show the short URL,
//!   remember it in [`SessionState`], then fetch analytics
//! - Analytics: `GET /stats/{code}` and render clicks and creation time
//! - Copy: put the remembered short URL on the clipboard
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_API_URL="http://127.0.0.1:8000"
//!
//! url-shortener-client shorten https://example.com --alias promo --copy
//! url-shortener-client stats promo
//! url-shortener-client interactive
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;
pub mod view;

pub mod config;

pub use application::SessionState;
pub use error::ClientError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
    pub use crate::api::dto::stats::StatsResponse;
    pub use crate::application::SessionState;
    pub use crate::application::services::{
        AnalyticsService, ClipboardService, CopyOutcome, ShortenService,
    };
    pub use crate::domain::ShortenForm;
    pub use crate::domain::gateways::{Clipboard, ClipboardError, ShortenerApi};
    pub use crate::error::ClientError;
    pub use crate::infrastructure::{HttpShortenerClient, SystemClipboard};
    pub use crate::view::{AnalyticsPanel, Notice, ResultCard, TerminalView, View};
}
