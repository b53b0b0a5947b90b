//! Gateway trait definitions for the domain layer.
//!
//! These traits abstract everything the flows talk to outside the process.
//!
//! # Architecture
//!
//! - Traits define the contract for outbound operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Gateways
//!
//! - [`ShortenerApi`] - Remote shortening and analytics service
//! - [`Clipboard`] - System clipboard

pub mod clipboard;
pub mod shortener_api;

pub use clipboard::{Clipboard, ClipboardError};
pub use shortener_api::ShortenerApi;

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use shortener_api::MockShortenerApi;
