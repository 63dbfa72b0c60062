//! Skill extraction — deterministic keyword scan over a certificate title.
//!
//! Every keyword found as a substring of the lowercased title contributes its
//! whole skill list. Duplicates collapse once, at the end, keeping first-seen
//! order. Titles with no keyword hit get `FALLBACK_SKILLS`.

/// Keyword → associated skill tags, scanned in this order.
pub const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("javascript", &["JavaScript", "Programming", "Web Development"]),
    ("react", &["React", "JavaScript", "Frontend Development", "UI/UX"]),
    ("python", &["Python", "Programming", "Data Science", "Backend Development"]),
    (
        "machine learning",
        &["Machine Learning", "Python", "Data Science", "AI", "Statistics"],
    ),
    (
        "data science",
        &["Data Science", "Python", "Statistics", "Data Analysis", "Machine Learning"],
    ),
    (
        "project management",
        &["Project Management", "Leadership", "Planning", "Communication"],
    ),
    (
        "leadership",
        &["Leadership", "Team Management", "Communication", "Strategic Thinking"],
    ),
    ("design", &["UI/UX Design", "Figma", "Creative Design", "User Experience"]),
    ("cloud", &["Cloud Computing", "AWS", "DevOps", "Infrastructure"]),
    (
        "database",
        &["Database Management", "SQL", "Data Modeling", "Backend Development"],
    ),
    ("mobile", &["Mobile Development", "React Native", "iOS", "Android"]),
    ("security", &["Cybersecurity", "Security", "Risk Management", "Compliance"]),
    (
        "networking",
        &["Networking", "System Administration", "Infrastructure", "Security"],
    ),
    ("testing", &["Testing", "Quality Assurance", "Automation", "Software Testing"]),
    ("agile", &["Agile", "Scrum", "Project Management", "Team Collaboration"]),
];

/// Returned when no keyword matches the title.
pub const FALLBACK_SKILLS: &[&str] = &["Problem Solving", "Communication", "Learning"];

/// Infers skill tags from a certificate title. Never returns an empty list.
pub fn extract_skills(title: &str) -> Vec<String> {
    let title = title.to_lowercase();

    let hits: Vec<&str> = SKILL_KEYWORDS
        .iter()
        .filter(|(keyword, _)| title.contains(keyword))
        .flat_map(|(_, skills)| skills.iter().copied())
        .collect();

    if hits.is_empty() {
        return FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    dedup_preserving_order(hits)
}

/// Case-sensitive dedup that keeps the first occurrence of each value.
pub fn dedup_preserving_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.as_ref();
        if !out.iter().any(|existing| existing == item) {
            out.push(item.to_string());
        }
    }
    out
}
