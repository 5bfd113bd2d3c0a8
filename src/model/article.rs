use chrono::NaiveDate;
use serde::Serialize;

/// A published news story.
#[derive(Debug, Clone, Serialize)]
pub struct NewsArticle {
    pub id: String,
    /// URL-safe identifier, distinct from `id`.
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub image: String,
    pub author: String,
    pub published: NaiveDate,
    pub category: String,
}
