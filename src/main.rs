use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{initialise_state, router};
use referral_core::{CoreConfig, DepartmentDirectory, config::referrals_file_from_env_value};

/// Main entry point for the referrals application
///
/// Resolves configuration once, initialises the referrals file and serves the REST API.
///
/// # Environment Variables
/// - `REFERRALS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `REFERRALS_CSV_PATH`: Referrals CSV file (default: "referrals.csv")
/// - `RUST_LOG`: Tracing filter
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("referrals_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("referral_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("REFERRALS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let referrals_file = referrals_file_from_env_value(std::env::var("REFERRALS_CSV_PATH").ok());

    let cfg = Arc::new(CoreConfig::new(
        referrals_file,
        DepartmentDirectory::standard(),
    )?);
    let state = initialise_state(cfg.clone())?;

    tracing::info!("++ Starting referrals REST on {}", rest_addr);
    tracing::info!("++ Referrals file: {}", cfg.referrals_file().display());

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
