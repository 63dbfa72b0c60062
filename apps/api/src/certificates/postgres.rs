use async_trait::async_trait;
use sqlx::PgPool;

use crate::certificates::CertificateSource;
use crate::errors::AppError;
use crate::models::certificate::Certificate;

/// Certificates table written by the portal's issuance workflow.
pub struct PgCertificateStore {
    pool: PgPool,
}

impl PgCertificateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CertificateSource for PgCertificateStore {
    async fn certificates_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<Certificate>, AppError> {
        let certificates = sqlx::query_as::<_, Certificate>(
            r#"
            SELECT id,
                   student_id,
                   COALESCE(title, '') AS title,
                   COALESCE(activity_id, '') AS activity_id
            FROM certificates
            WHERE student_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(certificates)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
