//! Certificate analysis — per-certificate skills, category, and ranked job matches.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::categorize::{categorize, CertificateCategory};
use crate::analysis::relevance::{matched_skills, missing_skills, score};
use crate::analysis::skills::extract_skills;
use crate::models::certificate::Certificate;
use crate::models::job_role::JobRole;

const MAX_JOB_MATCHES: usize = 5;
const MAX_MATCH_SUGGESTIONS: usize = 3;

/// How one certificate's skills line up with one job role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleMatch {
    pub job_role_id: String,
    pub job_title: String,
    pub match_score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>, // required skills only
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAnalysis {
    pub certificate_id: String,
    pub title: String,
    pub skills: Vec<String>,
    pub category: CertificateCategory,
    /// Best match score over every job role, not only the top slice.
    pub relevance_score: u32,
    /// Non-zero matches, best first, at most five.
    pub job_matches: Vec<JobRoleMatch>,
}

/// Scores `skills` against a single job role.
///
/// The score and `matched_skills` use required ∪ preferred skills, while
/// `missing_skills` only lists required skills.
pub fn match_job_role(skills: &[String], role: &JobRole) -> JobRoleMatch {
    let job_skills = role.all_skills();
    let missing = missing_skills(skills, &role.required_skills);

    JobRoleMatch {
        job_role_id: role.id.clone(),
        job_title: role.title.clone(),
        match_score: score(skills, &job_skills),
        matched_skills: matched_skills(skills, &job_skills),
        suggestions: missing.iter().take(MAX_MATCH_SUGGESTIONS).cloned().collect(),
        missing_skills: missing,
    }
}

/// Analyzes one certificate against every job role.
pub fn analyze_certificate(
    certificate: &Certificate,
    job_roles: &[JobRole],
) -> CertificateAnalysis {
    if certificate.title.trim().is_empty() {
        warn!(
            "Certificate {} has no title; using fallback skills",
            certificate.id
        );
    }

    let skills = extract_skills(&certificate.title);
    let category = categorize(&certificate.title, &skills);

    let mut job_matches: Vec<JobRoleMatch> = job_roles
        .iter()
        .map(|role| match_job_role(&skills, role))
        .filter(|m| m.match_score > 0)
        .collect();

    // Stable: equal scores keep catalog order.
    job_matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    let relevance_score = job_matches.first().map(|m| m.match_score).unwrap_or(0);
    job_matches.truncate(MAX_JOB_MATCHES);

    CertificateAnalysis {
        certificate_id: certificate.id.clone(),
        title: certificate.title.clone(),
        skills,
        category,
        relevance_score,
        job_matches,
    }
}

/// One analysis per input certificate, in input order.
pub fn analyze(certificates: &[Certificate], job_roles: &[JobRole]) -> Vec<CertificateAnalysis> {
    certificates
        .iter()
        .map(|certificate| analyze_certificate(certificate, job_roles))
        .collect()
}
