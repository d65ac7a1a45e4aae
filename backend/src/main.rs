//! Backend entry-point: loads settings, wires REST endpoints and OpenAPI docs,
//! and drives the HTTP server until shutdown.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use screening_backend::inbound::http::health::HealthState;
use screening_backend::settings::{AppSettings, display_request};
use server::{ServerConfig, create_server};

const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(error) = fmt().with_env_filter(filter).json().try_init() {
        warn!(%error, "tracing init failed");
    }
}

/// Build Prometheus middleware, logging and discarding failures so metrics
/// never block startup.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    make()
        .inspect_err(|error| warn!(%error, "metrics disabled: Prometheus setup failed"))
        .ok()
}

/// Load settings, printing `--help`/`--version` output and exiting with
/// clap's status when that was what the command line asked for.
fn load_settings() -> std::io::Result<AppSettings> {
    AppSettings::load().map_err(|error| {
        if let Some(request) = display_request(&error) {
            request.exit();
        }
        std::io::Error::other(format!("failed to load configuration: {error}"))
    })
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = load_settings()?;
    let config = ServerConfig::from_settings(&settings)?;
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("screening")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(version = env!("CARGO_PKG_VERSION"), "screening service started");

    let outcome = server.await;
    health_state.mark_unhealthy();
    match &outcome {
        Ok(()) => info!("screening service stopped"),
        Err(error) => warn!(%error, "screening service stopped with error"),
    }
    outcome
}
