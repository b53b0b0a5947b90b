//! Wire contract of the shortening service.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies exchanged with the service
//!
//! # Endpoints
//!
//! | Method | Path                 | Body                | Success                    |
//! |--------|----------------------|---------------------|----------------------------|
//! | `POST` | `/shorten`           | [`dto::shorten::ShortenRequest`] | [`dto::shorten::ShortenResponse`] |
//! | `GET`  | `/stats/{shortCode}` | -                   | [`dto::stats::StatsResponse`] |
//! | `GET`  | `/`                  | -                   | [`dto::health::HealthResponse`] |
//!
//! Failures use a non-2xx status with a `{"detail": ...}` body.

pub mod dto;

/// Path segment of the shortening endpoint.
pub const SHORTEN_SEGMENT: &str = "shorten";

/// Path segment preceding the short code on the analytics endpoint.
pub const STATS_SEGMENT: &str = "stats";
