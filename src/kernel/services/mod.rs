//! Services layer (ports + adapters).
//!
//! - `ports`: contracts and data types used across the app (kernel-facing).
//! - `adapters`: runtime specific implementations (HTTP, tokio, filesystem).

pub mod adapters;
pub mod ports;
