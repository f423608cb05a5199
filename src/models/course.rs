use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub embed_url: Option<String>,
}

/// Body of the new-course form. `duration` is typed here so non-numeric
/// input is rejected at the extractor instead of reaching the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCourseForm {
    pub title: String,
    pub description: String,
    pub duration: i64,
}
