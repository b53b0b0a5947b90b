//! Utility functions for URL handling and display formatting.
//!
//! - [`base_url`] - Validation of the configured service address
//! - [`short_code`] - Short code extraction from short URLs
//! - [`timestamp`] - Rendering of creation timestamps

pub mod base_url;
pub mod short_code;
pub mod timestamp;
