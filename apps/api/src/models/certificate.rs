use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Certificate snapshot handed to the analysis core.
///
/// Only `title` feeds skill inference; the other fields are carried through
/// to the response. Unknown fields from the certificate store (status, grade,
/// file path, ...) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub student_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub activity_id: String,
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
impl Certificate {
    pub fn new(id: &str, student_id: &str, title: &str, activity_id: &str) -> Self {
        Self {
            id: id.to_string(),
            student_id: student_id.to_string(),
            title: title.to_string(),
            activity_id: activity_id.to_string(),
        }
    }
}
