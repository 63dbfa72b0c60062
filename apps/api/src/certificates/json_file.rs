use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::certificates::CertificateSource;
use crate::errors::AppError;
use crate::models::certificate::Certificate;

/// Shape of the portal's `certificates.json` flat file.
#[derive(Debug, Default, Deserialize)]
struct CertificatesFile {
    #[serde(default)]
    certificates: Vec<Certificate>,
}

/// Reads certificates from a flat JSON file on every call.
/// A missing file means no certificates have been issued yet.
pub struct JsonFileCertificateStore {
    path: PathBuf,
}

impl JsonFileCertificateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> anyhow::Result<Vec<Certificate>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not found; treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        let file: CertificatesFile = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid certificates JSON in {}", self.path.display()))?;
        Ok(file.certificates)
    }
}

#[async_trait]
impl CertificateSource for JsonFileCertificateStore {
    async fn certificates_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<Certificate>, AppError> {
        let certificates = self.read_all().await?;
        Ok(certificates
            .into_iter()
            .filter(|c| c.student_id == student_id)
            .collect())
    }

    fn backend(&self) -> &'static str {
        "json_file"
    }
}
