//! Relevance scoring — fuzzy overlap between a skill set and a job role's skills.
//!
//! Two skills match when either one contains the other, ignoring case.
//! This tolerates naming variance ("UI/UX Design" vs "Design") and accepts the
//! false positives that come with it.

/// Symmetric, case-insensitive substring containment.
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// True if `skill` fuzzily matches at least one entry of `candidates`.
pub fn matches_any(skill: &str, candidates: &[String]) -> bool {
    candidates.iter().any(|candidate| fuzzy_match(skill, candidate))
}

/// Skills that fuzzily match any of `job_skills`, in input order.
pub fn matched_skills(skills: &[String], job_skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .filter(|skill| matches_any(skill, job_skills))
        .cloned()
        .collect()
}

/// Job skills with no fuzzy match among `skills`, in job-skill order.
pub fn missing_skills(skills: &[String], job_skills: &[String]) -> Vec<String> {
    job_skills
        .iter()
        .filter(|job_skill| !matches_any(job_skill, skills))
        .cloned()
        .collect()
}

/// `round(matched / job_skills.len() * 100)`, clamped to 0..=100.
///
/// Returns 0 for an empty `job_skills` list.
pub fn score(skills: &[String], job_skills: &[String]) -> u32 {
    if job_skills.is_empty() {
        return 0;
    }

    let matched = matched_skills(skills, job_skills).len();
    let ratio = matched as f64 / job_skills.len() as f64;
    ((ratio * 100.0).round() as u32).min(100)
}
