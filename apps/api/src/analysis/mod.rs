// Portfolio analysis: skill extraction, categorization, job role scoring,
// resume suggestions. Pure functions over certificates and the job role catalog.
// No I/O here; handlers fetch certificates and hand them in.

pub mod analyzer;
pub mod catalog;
pub mod categorize;
pub mod handlers;
pub mod portfolio;
pub mod relevance;
pub mod skills;
pub mod suggestions;
