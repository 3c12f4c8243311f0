//! # API Shared
//!
//! Shared utilities and definitions for the referral APIs.
//!
//! Contains:
//! - Request and response types (`dto` module), serialisable and documented for OpenAPI
//! - Shared services like `HealthService`
//!
//! Used by `referral-core`, `api-rest` and the CLI for common functionality.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
