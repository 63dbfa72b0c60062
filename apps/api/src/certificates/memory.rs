use async_trait::async_trait;

use crate::certificates::CertificateSource;
use crate::errors::AppError;
use crate::models::certificate::Certificate;

/// Fixed certificate list for router tests.
pub struct InMemoryCertificateStore {
    certificates: Vec<Certificate>,
}

impl InMemoryCertificateStore {
    pub fn new(certificates: Vec<Certificate>) -> Self {
        Self { certificates }
    }
}

#[async_trait]
impl CertificateSource for InMemoryCertificateStore {
    async fn certificates_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<Certificate>, AppError> {
        Ok(self
            .certificates
            .iter()
            .filter(|c| c.student_id == student_id)
            .cloned()
            .collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
