//! Certificate sources — where a student's certificates come from.
//!
//! The analysis core only sees `Vec<Certificate>`. `AppState` holds an
//! `Arc<dyn CertificateSource>`, chosen at startup from config.

pub mod json_file;
pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::certificate::Certificate;

pub use json_file::JsonFileCertificateStore;
pub use postgres::PgCertificateStore;

#[async_trait]
pub trait CertificateSource: Send + Sync {
    /// All certificates held by `student_id`, in store order.
    async fn certificates_for_student(&self, student_id: &str)
        -> Result<Vec<Certificate>, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}
