use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Material {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub content: String,
    pub embed_url: Option<String>,
}

/// Body of both the new-material and edit-material forms. An edit replaces
/// title, content and embed_url together; a blank embed field overwrites.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialForm {
    pub title: String,
    pub content: String,
    pub embed_url: Option<String>,
}
