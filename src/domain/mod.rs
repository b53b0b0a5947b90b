//! Domain layer containing the client's input model and outbound contracts.
//!
//! # Architecture
//!
//! - [`form`] - Raw form input and its conversion into a request
//! - [`gateways`] - Trait definitions for the shortening service and the clipboard
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Flows live in services (see [`crate::application::services`])

pub mod form;
pub mod gateways;

pub use form::ShortenForm;
