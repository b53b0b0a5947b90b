//! Application layer implementing the client flows.
//!
//! Services consume the gateway traits and the [`crate::view::View`]
//! bindings, so every flow can run against a terminal, a test double or any
//! other front end.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Form submission and result rendering
//! - [`services::analytics_service::AnalyticsService`] - Click analytics for a short code
//! - [`services::clipboard_service::ClipboardService`] - Copying the last short URL
//!
//! Shared component state lives in [`state::SessionState`] and is passed to
//! the services explicitly.

pub mod services;
pub mod state;

pub use state::SessionState;
