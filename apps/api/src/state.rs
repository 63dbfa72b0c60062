use std::sync::Arc;

use crate::analysis::catalog::JobRoleCatalog;
use crate::certificates::CertificateSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only job role catalog, built once at startup.
    pub catalog: Arc<JobRoleCatalog>,
    /// Pluggable certificate source. JSON file by default, Postgres when DATABASE_URL is set.
    pub certificates: Arc<dyn CertificateSource>,
}
