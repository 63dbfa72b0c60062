mod analysis;
mod certificates;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::catalog::JobRoleCatalog;
use crate::certificates::{CertificateSource, JsonFileCertificateStore, PgCertificateStore};
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Job role catalog: file override or the built-in seed roles
    let catalog = match &config.job_roles_file {
        Some(path) => JobRoleCatalog::from_file(path)?,
        None => JobRoleCatalog::seed(),
    };
    if catalog.is_empty() {
        warn!("Job role catalog is empty; every relevance score will be 0");
    }
    info!("Job role catalog ready ({} roles)", catalog.len());

    // Certificate source: Postgres when configured, otherwise the flat JSON file
    let certificates: Arc<dyn CertificateSource> = match &config.database_url {
        Some(url) => Arc::new(PgCertificateStore::new(create_pool(url).await?)),
        None => Arc::new(JsonFileCertificateStore::new(&config.certificates_file)),
    };
    info!("Certificate source: {}", certificates.backend());

    let state = AppState {
        catalog: Arc::new(catalog),
        certificates,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
