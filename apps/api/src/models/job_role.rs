use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

/// A target occupation profile. Immutable reference data, unique `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub industry: String,
}

impl JobRole {
    /// Required skills followed by preferred skills, duplicates kept.
    pub fn all_skills(&self) -> Vec<String> {
        self.required_skills
            .iter()
            .chain(self.preferred_skills.iter())
            .cloned()
            .collect()
    }
}
