//! Certificate categorization — one category per certificate, first matching rule wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateCategory {
    Academic,
    Professional,
    Technical,
    Leadership,
    Creative,
}

/// One categorization rule: title terms, skill terms, resulting category.
struct CategoryRule {
    title_terms: &'static [&'static str],
    skill_terms: &'static [&'static str],
    category: CertificateCategory,
}

/// Checked in order; first match wins.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        title_terms: &["leadership", "management"],
        skill_terms: &["leadership"],
        category: CertificateCategory::Leadership,
    },
    CategoryRule {
        title_terms: &["design", "ui", "ux"],
        skill_terms: &["design"],
        category: CertificateCategory::Creative,
    },
    CategoryRule {
        title_terms: &["data", "machine learning", "python"],
        skill_terms: &["data"],
        category: CertificateCategory::Technical,
    },
    CategoryRule {
        title_terms: &["project", "business"],
        skill_terms: &["management"],
        category: CertificateCategory::Professional,
    },
];

/// Assigns a single category from the title and the extracted skills.
/// Matching is case-insensitive substring containment.
pub fn categorize(title: &str, skills: &[String]) -> CertificateCategory {
    let title = title.to_lowercase();
    let skills: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    CATEGORY_RULES
        .iter()
        .find(|rule| {
            rule.title_terms.iter().any(|term| title.contains(term))
                || rule
                    .skill_terms
                    .iter()
                    .any(|term| skills.iter().any(|s| s.contains(term)))
        })
        .map(|rule| rule.category)
        .unwrap_or(CertificateCategory::Academic)
}
