//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging. The workspace's main `referrals-run` binary serves the
//! same router.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{initialise_state, router};
use referral_core::{config::referrals_file_from_env_value, CoreConfig, DepartmentDirectory};

/// Main entry point for the referrals REST API server
///
/// # Environment Variables
/// - `REFERRALS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `REFERRALS_CSV_PATH`: Referrals CSV file (default: "referrals.csv")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the referrals file cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("referral_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("REFERRALS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let referrals_file = referrals_file_from_env_value(std::env::var("REFERRALS_CSV_PATH").ok());

    let cfg = Arc::new(CoreConfig::new(
        referrals_file,
        DepartmentDirectory::standard(),
    )?);
    let state = initialise_state(cfg.clone())?;

    tracing::info!("-- Starting referrals REST API on {}", addr);
    tracing::info!("-- Referrals file: {}", cfg.referrals_file().display());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
