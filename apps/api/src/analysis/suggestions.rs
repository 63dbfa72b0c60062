//! Resume suggestions — rolls per-certificate analyses up into per-role advice
//! and an overall skills profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::CertificateAnalysis;
use crate::analysis::categorize::CertificateCategory;
use crate::analysis::skills::dedup_preserving_order;
use crate::models::job_role::JobRole;

/// A certificate backs a role only above this per-role match score.
const RELEVANT_MATCH_THRESHOLD: u32 = 30;
/// Suggestions at or below this overall match are dropped.
const MIN_OVERALL_MATCH: u32 = 20;
const HIGH_PRIORITY_ABOVE: u32 = 70;
const MEDIUM_PRIORITY_ABOVE: u32 = 40;
const MAX_STRENGTHS: usize = 3;
const MAX_IMPROVEMENT_AREAS: usize = 5;
const TRAINING_HINT_SKILLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_overall_match(overall_match: u32) -> Self {
        if overall_match > HIGH_PRIORITY_ABOVE {
            Priority::High
        } else if overall_match > MEDIUM_PRIORITY_ABOVE {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSuggestion {
    pub job_role_id: String,
    pub job_title: String,
    pub recommended_certificates: Vec<String>,
    pub overall_match: u32,
    pub reasoning: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProfile {
    pub total_skills: Vec<String>,
    /// Skills per category, concatenated across certificates without dedup.
    pub skill_categories: BTreeMap<CertificateCategory, Vec<String>>,
    pub strengths: Vec<CertificateCategory>,
    pub improvement_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    pub resume_suggestions: Vec<ResumeSuggestion>,
    pub overall_profile: OverallProfile,
}

pub fn build_suggestions(
    analyses: &[CertificateAnalysis],
    job_roles: &[JobRole],
) -> SuggestionReport {
    let mut resume_suggestions: Vec<ResumeSuggestion> = job_roles
        .iter()
        .map(|role| suggest_for_role(analyses, role))
        .filter(|s| s.overall_match > MIN_OVERALL_MATCH)
        .collect();
    resume_suggestions.sort_by(|a, b| b.overall_match.cmp(&a.overall_match));

    SuggestionReport {
        resume_suggestions,
        overall_profile: build_profile(analyses, job_roles),
    }
}

/// Builds the (unfiltered) suggestion for one role.
pub fn suggest_for_role(analyses: &[CertificateAnalysis], role: &JobRole) -> ResumeSuggestion {
    let relevant: Vec<&CertificateAnalysis> = analyses
        .iter()
        .filter(|a| {
            a.job_matches
                .iter()
                .any(|m| m.job_role_id == role.id && m.match_score > RELEVANT_MATCH_THRESHOLD)
        })
        .collect();

    // Averages each certificate's best score, not its score for this role.
    let overall_match = if relevant.is_empty() {
        0
    } else {
        let total: u32 = relevant.iter().map(|a| a.relevance_score).sum();
        (total as f64 / relevant.len() as f64).round() as u32
    };

    ResumeSuggestion {
        job_role_id: role.id.clone(),
        job_title: role.title.clone(),
        recommended_certificates: relevant.iter().map(|a| a.certificate_id.clone()).collect(),
        overall_match,
        reasoning: build_reasoning(overall_match, relevant.len(), role),
        priority: Priority::from_overall_match(overall_match),
    }
}

fn build_reasoning(overall_match: u32, relevant_count: usize, role: &JobRole) -> String {
    if overall_match > HIGH_PRIORITY_ABOVE {
        format!("Strong match with {relevant_count} relevant certificates")
    } else if overall_match > MEDIUM_PRIORITY_ABOVE {
        "Moderate match with some relevant skills".to_string()
    } else {
        let hint: Vec<&str> = role
            .required_skills
            .iter()
            .take(TRAINING_HINT_SKILLS)
            .map(String::as_str)
            .collect();
        format!(
            "Limited match - consider additional training in {}",
            hint.join(", ")
        )
    }
}

pub fn build_profile(analyses: &[CertificateAnalysis], job_roles: &[JobRole]) -> OverallProfile {
    let total_skills = dedup_preserving_order(analyses.iter().flat_map(|a| a.skills.iter()));

    // First-seen category order decides ties between equally sized categories.
    let mut grouped: Vec<(CertificateCategory, Vec<String>)> = Vec::new();
    for analysis in analyses {
        match grouped.iter_mut().find(|(c, _)| *c == analysis.category) {
            Some((_, skills)) => skills.extend(analysis.skills.iter().cloned()),
            None => grouped.push((analysis.category, analysis.skills.clone())),
        }
    }

    let mut by_size: Vec<&(CertificateCategory, Vec<String>)> = grouped.iter().collect();
    by_size.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    let strengths = by_size
        .iter()
        .take(MAX_STRENGTHS)
        .map(|(category, _)| *category)
        .collect();

    let known: Vec<String> = total_skills.iter().map(|s| s.to_lowercase()).collect();
    let required = dedup_preserving_order(job_roles.iter().flat_map(|r| r.required_skills.iter()));
    let improvement_areas = required
        .into_iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            !known.iter().any(|k| k.contains(&skill))
        })
        .take(MAX_IMPROVEMENT_AREAS)
        .collect();

    OverallProfile {
        total_skills,
        skill_categories: grouped.into_iter().collect(),
        strengths,
        improvement_areas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::{analyze, JobRoleMatch};
    use crate::analysis::catalog::JobRoleCatalog;
    use crate::models::certificate::Certificate;

    fn portal_analyses() -> Vec<CertificateAnalysis> {
        let certs = vec![
            Certificate::new("cert_1", "stu_1", "JavaScript Fundamentals", "act_1"),
            Certificate::new("cert_2", "stu_1", "React Development Workshop", "act_2"),
            Certificate::new("cert_3", "stu_1", "Python for Data Science", "act_3"),
            Certificate::new("cert_4", "stu_1", "Leadership Skills Training", "act_4"),
            Certificate::new("cert_5", "stu_1", "UI/UX Design Principles", "act_5"),
        ];
        analyze(&certs, JobRoleCatalog::seed().roles())
    }

    fn analysis_with(
        id: &str,
        category: CertificateCategory,
        skills: &[&str],
        relevance: u32,
        matches: &[(&str, u32)],
    ) -> CertificateAnalysis {
        CertificateAnalysis {
            certificate_id: id.to_string(),
            title: id.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            category,
            relevance_score: relevance,
            job_matches: matches
                .iter()
                .map(|(role, score)| JobRoleMatch {
                    job_role_id: role.to_string(),
                    job_title: role.to_string(),
                    match_score: *score,
                    matched_skills: vec![],
                    missing_skills: vec![],
                    suggestions: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn test_priority_buckets() {
        assert_eq!(Priority::from_overall_match(71), Priority::High);
        assert_eq!(Priority::from_overall_match(70), Priority::Medium);
        assert_eq!(Priority::from_overall_match(41), Priority::Medium);
        assert_eq!(Priority::from_overall_match(40), Priority::Low);
        assert_eq!(Priority::from_overall_match(0), Priority::Low);
    }

    #[test]
    fn test_overall_match_averages_relevance_of_certs_above_threshold() {
        let catalog = JobRoleCatalog::seed();
        let dev = catalog.get("jr_1").unwrap();
        let analyses = vec![
            analysis_with("a", CertificateCategory::Technical, &[], 80, &[("jr_1", 40)]),
            analysis_with("b", CertificateCategory::Technical, &[], 65, &[("jr_1", 31)]),
            // exactly 30 is not relevant
            analysis_with("c", CertificateCategory::Technical, &[], 90, &[("jr_1", 30)]),
            analysis_with("d", CertificateCategory::Technical, &[], 99, &[("jr_2", 99)]),
        ];

        let suggestion = suggest_for_role(&analyses, dev);
        assert_eq!(suggestion.recommended_certificates, vec!["a", "b"]);
        // (80 + 65) / 2 = 72.5 → 73
        assert_eq!(suggestion.overall_match, 73);
        assert_eq!(suggestion.priority, Priority::High);
        assert_eq!(
            suggestion.reasoning,
            "Strong match with 2 relevant certificates"
        );
    }

    #[test]
    fn test_reasoning_templates() {
        let catalog = JobRoleCatalog::seed();
        let dev = catalog.get("jr_1").unwrap();

        let moderate = vec![analysis_with(
            "a",
            CertificateCategory::Technical,
            &[],
            50,
            &[("jr_1", 50)],
        )];
        let suggestion = suggest_for_role(&moderate, dev);
        assert_eq!(suggestion.priority, Priority::Medium);
        assert_eq!(suggestion.reasoning, "Moderate match with some relevant skills");

        let suggestion = suggest_for_role(&[], dev);
        assert_eq!(suggestion.overall_match, 0);
        assert_eq!(suggestion.priority, Priority::Low);
        assert_eq!(
            suggestion.reasoning,
            "Limited match - consider additional training in JavaScript, React, Node.js"
        );
    }

    #[test]
    fn test_suggestions_sorted_and_filtered() {
        let catalog = JobRoleCatalog::seed();
        let analyses = vec![
            analysis_with("a", CertificateCategory::Technical, &[], 20, &[("jr_1", 35)]),
            analysis_with("b", CertificateCategory::Technical, &[], 50, &[("jr_2", 50)]),
            analysis_with("c", CertificateCategory::Technical, &[], 90, &[("jr_3", 90)]),
        ];

        let report = build_suggestions(&analyses, catalog.roles());
        let ids: Vec<&str> = report
            .resume_suggestions
            .iter()
            .map(|s| s.job_role_id.as_str())
            .collect();
        // jr_1 averages to exactly 20 and is dropped
        assert_eq!(ids, vec!["jr_3", "jr_2"]);
    }

    #[test]
    fn test_portal_certificates_invariants() {
        let report = build_suggestions(&portal_analyses(), JobRoleCatalog::seed().roles());
        assert!(report
            .resume_suggestions
            .iter()
            .all(|s| s.overall_match > MIN_OVERALL_MATCH && s.overall_match <= 100));
        assert!(report
            .resume_suggestions
            .windows(2)
            .all(|w| w[0].overall_match >= w[1].overall_match));
    }

    #[test]
    fn test_profile_total_skills_deduped() {
        let analyses = vec![
            analysis_with("a", CertificateCategory::Technical, &["Python", "SQL"], 0, &[]),
            analysis_with("b", CertificateCategory::Technical, &["SQL", "Git"], 0, &[]),
        ];
        let profile = build_profile(&analyses, &[]);
        assert_eq!(profile.total_skills, vec!["Python", "SQL", "Git"]);
        assert_eq!(
            profile.skill_categories[&CertificateCategory::Technical],
            vec!["Python", "SQL", "SQL", "Git"]
        );
    }

    #[test]
    fn test_strengths_rank_categories_by_skill_count() {
        let analyses = vec![
            analysis_with("a", CertificateCategory::Academic, &["A1"], 0, &[]),
            analysis_with("b", CertificateCategory::Creative, &["C1", "C2", "C3"], 0, &[]),
            analysis_with("c", CertificateCategory::Leadership, &["L1", "L2"], 0, &[]),
            analysis_with("d", CertificateCategory::Technical, &["T1", "T2"], 0, &[]),
        ];
        let profile = build_profile(&analyses, &[]);
        // Leadership and Technical tie; Leadership was seen first.
        assert_eq!(
            profile.strengths,
            vec![
                CertificateCategory::Creative,
                CertificateCategory::Leadership,
                CertificateCategory::Technical,
            ]
        );
    }

    #[test]
    fn test_improvement_areas_are_unknown_required_skills() {
        let catalog = JobRoleCatalog::seed();
        let analyses = vec![analysis_with(
            "a",
            CertificateCategory::Technical,
            &["JavaScript", "React Native", "Git"],
            0,
            &[],
        )];
        let profile = build_profile(&analyses, catalog.roles());
        // "React" is covered by "React Native"; "Node.js" is the first gap.
        assert_eq!(
            profile.improvement_areas,
            vec!["Node.js", "Problem Solving", "Python", "Machine Learning", "Statistics"]
        );
    }

    #[test]
    fn test_improvement_areas_list_shared_required_skill_once() {
        let roles = vec![
            JobRole {
                id: "a".to_string(),
                title: "Backend".to_string(),
                description: String::new(),
                required_skills: vec!["Kotlin".to_string(), "SQL".to_string()],
                preferred_skills: vec![],
                experience_level: crate::models::job_role::ExperienceLevel::Entry,
                industry: "Technology".to_string(),
            },
            JobRole {
                id: "b".to_string(),
                title: "Android".to_string(),
                description: String::new(),
                required_skills: vec!["Kotlin".to_string(), "Gradle".to_string()],
                preferred_skills: vec![],
                experience_level: crate::models::job_role::ExperienceLevel::Entry,
                industry: "Technology".to_string(),
            },
        ];
        let profile = build_profile(&[], &roles);
        assert_eq!(profile.improvement_areas, vec!["Kotlin", "SQL", "Gradle"]);
    }

    #[test]
    fn test_improvement_areas_match_one_direction_only() {
        let roles = vec![JobRoleCatalog::seed().get("jr_4").unwrap().clone()];
        // "Design" is contained in "Design Thinking", but not the other way round.
        let analyses = vec![analysis_with(
            "a",
            CertificateCategory::Creative,
            &["Design"],
            0,
            &[],
        )];
        let profile = build_profile(&analyses, &roles);
        assert!(profile.improvement_areas.contains(&"Design Thinking".to_string()));
    }

    #[test]
    fn test_empty_catalog_yields_empty_suggestions_and_gaps() {
        let report = build_suggestions(&portal_analyses(), &[]);
        assert!(report.resume_suggestions.is_empty());
        assert!(report.overall_profile.improvement_areas.is_empty());
        assert!(!report.overall_profile.total_skills.is_empty());
    }

    #[test]
    fn test_no_certificates_yields_empty_profile() {
        let report = build_suggestions(&[], JobRoleCatalog::seed().roles());
        assert!(report.resume_suggestions.is_empty());
        assert!(report.overall_profile.total_skills.is_empty());
        assert!(report.overall_profile.strengths.is_empty());
        assert_eq!(report.overall_profile.improvement_areas.len(), 5);
    }

    #[test]
    fn test_skill_categories_serialize_with_lowercase_keys() {
        let analyses = vec![analysis_with(
            "a",
            CertificateCategory::Leadership,
            &["Leadership"],
            0,
            &[],
        )];
        let json = serde_json::to_value(build_profile(&analyses, &[])).unwrap();
        assert_eq!(json["skillCategories"]["leadership"][0], "Leadership");
        assert_eq!(json["strengths"][0], "leadership");
    }
}
