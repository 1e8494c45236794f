//! HTTP server for the payroll engine.
//!
//! Reads `NOMINA_CONFIG_DIR` (default `./config/mx_lft`) for the policy files
//! and listens on `NOMINA_ADDR` (default `0.0.0.0:3000`). Log verbosity is
//! controlled through `RUST_LOG`.

use std::env;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nomina_engine::api::{AppState, create_router};
use nomina_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/mx_lft";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("NOMINA_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("NOMINA_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        timezone = %config.policy().timezone,
        "Loaded payroll policy"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "Payroll engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
