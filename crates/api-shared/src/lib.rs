//! # API Shared
//!
//! Shared utilities and definitions for the demo HTTP APIs.
//!
//! Contains:
//! - The HTTP error type (`ApiError`) used by every controller
//! - A shared `HealthService`
//! - Startup configuration (`config` module)
//!
//! Used by `products` and `patient-service` for common functionality.

pub mod config;
pub mod error;
pub mod health;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};
pub use health::{HealthRes, HealthService};
