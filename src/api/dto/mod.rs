//! Data Transfer Objects for API requests and responses.
//!
//! Requests are serialized with Serde and omit absent optional fields;
//! responses tolerate extra fields the service may add.

pub mod health;
pub mod shorten;
pub mod stats;
