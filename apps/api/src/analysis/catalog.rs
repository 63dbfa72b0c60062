//! Job role catalog — immutable reference data built once at startup and
//! passed into the analysis functions.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::models::job_role::{ExperienceLevel, JobRole};

#[derive(Debug, Clone, PartialEq)]
pub struct JobRoleCatalog {
    roles: Vec<JobRole>,
}

impl JobRoleCatalog {
    /// Builds a catalog, rejecting duplicate role ids.
    pub fn new(roles: Vec<JobRole>) -> Result<Self> {
        let mut seen = HashSet::new();
        for role in &roles {
            if !seen.insert(role.id.as_str()) {
                bail!("Duplicate job role id '{}'", role.id);
            }
        }
        Ok(Self { roles })
    }

    /// A catalog with no roles. Every score against it is 0.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self { roles: Vec::new() }
    }

    /// Loads a JSON array of job roles from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job roles file {}", path.display()))?;
        let roles: Vec<JobRole> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid job roles JSON in {}", path.display()))?;
        info!("Loaded {} job roles from {}", roles.len(), path.display());
        Self::new(roles)
    }

    /// The five roles the portal ships with.
    pub fn seed() -> Self {
        Self {
            roles: vec![
                role(
                    "jr_1",
                    "Software Developer",
                    "Develop and maintain software applications",
                    &["JavaScript", "React", "Node.js", "Git", "Problem Solving"],
                    &["TypeScript", "MongoDB", "AWS", "Docker", "Testing"],
                    ExperienceLevel::Entry,
                    "Technology",
                ),
                role(
                    "jr_2",
                    "Data Scientist",
                    "Analyze data and build machine learning models",
                    &["Python", "Machine Learning", "Statistics", "SQL", "Data Analysis"],
                    &["TensorFlow", "Pandas", "R", "Deep Learning", "Cloud Computing"],
                    ExperienceLevel::Mid,
                    "Technology",
                ),
                role(
                    "jr_3",
                    "Project Manager",
                    "Lead and coordinate project teams",
                    &["Leadership", "Communication", "Planning", "Agile", "Risk Management"],
                    &[
                        "PMP",
                        "Scrum Master",
                        "Budget Management",
                        "Team Building",
                        "Stakeholder Management",
                    ],
                    ExperienceLevel::Mid,
                    "Management",
                ),
                role(
                    "jr_4",
                    "UI/UX Designer",
                    "Design user interfaces and experiences",
                    &["Figma", "User Research", "Wireframing", "Prototyping", "Design Thinking"],
                    &[
                        "Adobe Creative Suite",
                        "HTML/CSS",
                        "JavaScript",
                        "Accessibility",
                        "Animation",
                    ],
                    ExperienceLevel::Entry,
                    "Design",
                ),
                role(
                    "jr_5",
                    "DevOps Engineer",
                    "Manage infrastructure and deployment pipelines",
                    &["Docker", "Kubernetes", "AWS", "CI/CD", "Linux"],
                    &["Terraform", "Monitoring", "Security", "Python", "Cloud Architecture"],
                    ExperienceLevel::Mid,
                    "Technology",
                ),
            ],
        }
    }

    pub fn roles(&self) -> &[JobRole] {
        &self.roles
    }

    pub fn get(&self, id: &str) -> Option<&JobRole> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

fn role(
    id: &str,
    title: &str,
    description: &str,
    required: &[&str],
    preferred: &[&str],
    experience_level: ExperienceLevel,
    industry: &str,
) -> JobRole {
    JobRole {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
        experience_level,
        industry: industry.to_string(),
    }
}
