//! # API REST
//!
//! REST API implementation for the referral service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, status codes, CORS)
//!
//! Uses `api-shared` for request/response types and `referral-core` for the operations.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{router, ApiDoc, AppState};

use referral_core::{CoreConfig, ReferralResult, ReferralService};
use std::sync::Arc;

/// Builds the handler state and makes sure the referrals file exists with its header.
///
/// # Errors
///
/// Returns an error if the referrals file cannot be initialised.
pub fn initialise_state(cfg: Arc<CoreConfig>) -> ReferralResult<AppState> {
    let referral_service = ReferralService::new(cfg);
    referral_service.initialise_store()?;
    Ok(AppState { referral_service })
}
