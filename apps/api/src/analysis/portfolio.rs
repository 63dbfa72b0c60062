//! Portfolio items — one showcase entry per selected certificate.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyze_certificate;
use crate::analysis::categorize::CertificateCategory;
use crate::models::certificate::Certificate;
use crate::models::job_role::JobRole;

const DESCRIPTION_SKILLS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub student_id: String,
    pub certificate_id: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub category: CertificateCategory,
    pub relevance_score: u32,
    pub generated_at: i64, // unix millis
}

/// Which certificates go into the portfolio.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioSelection {
    All,
    Only(Vec<String>),
}

impl PortfolioSelection {
    pub fn includes(&self, certificate_id: &str) -> bool {
        match self {
            PortfolioSelection::All => true,
            PortfolioSelection::Only(ids) => ids.iter().any(|id| id == certificate_id),
        }
    }
}

/// Builds portfolio items in certificate order, stamped with `generated_at`.
pub fn build_portfolio(
    certificates: &[Certificate],
    selection: &PortfolioSelection,
    job_roles: &[JobRole],
    generated_at: i64,
) -> Vec<PortfolioItem> {
    certificates
        .iter()
        .filter(|cert| selection.includes(&cert.id))
        .map(|cert| {
            let analysis = analyze_certificate(cert, job_roles);
            let highlighted: Vec<&str> = analysis
                .skills
                .iter()
                .take(DESCRIPTION_SKILLS)
                .map(String::as_str)
                .collect();

            PortfolioItem {
                id: format!("portfolio_{}", cert.id),
                student_id: cert.student_id.clone(),
                certificate_id: cert.id.clone(),
                title: cert.title.clone(),
                description: format!(
                    "Portfolio item generated from {} certificate. Demonstrates expertise in {}.",
                    cert.title,
                    highlighted.join(", ")
                ),
                skills: analysis.skills,
                category: analysis.category,
                relevance_score: analysis.relevance_score,
                generated_at,
            }
        })
        .collect()
}
