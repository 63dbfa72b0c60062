//! Axum route handlers for the Portfolio API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::analyzer::{analyze, CertificateAnalysis};
use crate::analysis::portfolio::{build_portfolio, PortfolioItem, PortfolioSelection};
use crate::analysis::suggestions::{build_suggestions, OverallProfile, ResumeSuggestion};
use crate::errors::AppError;
use crate::models::job_role::JobRole;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub student_id: String,
    /// Accepted but not applied: analysis always covers the full catalog and
    /// clients filter the response themselves.
    #[serde(default)]
    pub job_role_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: Vec<CertificateAnalysis>,
    pub resume_suggestions: Vec<ResumeSuggestion>,
    pub overall_profile: OverallProfile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRolesResponse {
    pub job_roles: Vec<JobRole>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleResponse {
    pub job_role: JobRole,
}

fn default_include_all() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePortfolioRequest {
    pub student_id: String,
    #[serde(default = "default_include_all")]
    pub include_all_certificates: bool,
    #[serde(default)]
    pub selected_certificates: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePortfolioResponse {
    pub portfolio_items: Vec<PortfolioItem>,
    pub total_items: usize,
    pub generated_at: i64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/portfolio/job-roles
pub async fn handle_list_job_roles(State(state): State<AppState>) -> Json<JobRolesResponse> {
    Json(JobRolesResponse {
        job_roles: state.catalog.roles().to_vec(),
    })
}

/// GET /api/portfolio/job-roles/:id
pub async fn handle_get_job_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobRoleResponse>, AppError> {
    let job_role = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job role {id} not found")))?;
    Ok(Json(JobRoleResponse { job_role }))
}

/// POST /api/portfolio/analyze
///
/// Scores every certificate of the student against the whole catalog, then
/// rolls the results up into resume suggestions and a skills profile.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let student_id = require_student_id(&request.student_id)?;

    if let Some(job_role_id) = &request.job_role_id {
        debug!("jobRoleId {job_role_id} supplied; analysis covers the full catalog");
    }

    let certificates = state
        .certificates
        .certificates_for_student(student_id)
        .await?;
    debug!(
        "Analyzing {} certificates for student {student_id} against {} job roles",
        certificates.len(),
        state.catalog.len()
    );

    let roles = state.catalog.roles();
    let analysis = analyze(&certificates, roles);
    let report = build_suggestions(&analysis, roles);

    Ok(Json(AnalyzeResponse {
        analysis,
        resume_suggestions: report.resume_suggestions,
        overall_profile: report.overall_profile,
    }))
}

/// POST /api/portfolio/generate
pub async fn handle_generate_portfolio(
    State(state): State<AppState>,
    Json(request): Json<GeneratePortfolioRequest>,
) -> Result<Json<GeneratePortfolioResponse>, AppError> {
    let student_id = require_student_id(&request.student_id)?;

    let certificates = state
        .certificates
        .certificates_for_student(student_id)
        .await?;

    let selection = if request.include_all_certificates {
        PortfolioSelection::All
    } else {
        let unknown: Vec<&str> = request
            .selected_certificates
            .iter()
            .filter(|id| !certificates.iter().any(|c| &c.id == *id))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            warn!(
                "Student {student_id} selected unknown certificates: {}",
                unknown.join(", ")
            );
        }
        PortfolioSelection::Only(request.selected_certificates)
    };

    let generated_at = Utc::now().timestamp_millis();
    let portfolio_items =
        build_portfolio(&certificates, &selection, state.catalog.roles(), generated_at);

    Ok(Json(GeneratePortfolioResponse {
        total_items: portfolio_items.len(),
        portfolio_items,
        generated_at,
    }))
}

fn require_student_id(student_id: &str) -> Result<&str, AppError> {
    let trimmed = student_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("studentId cannot be empty".to_string()));
    }
    Ok(trimmed)
}
