use serde::Serialize;

/// A club competing in the league.
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// URL-safe identifier, distinct from `id`.
    pub slug: String,
    /// Emblem glyph shown next to the club name.
    pub crest: String,
    pub founded: u16,
    pub stadium: String,
    pub capacity: u32,
    /// Brand colors, primary first. Never empty.
    pub colors: Vec<String>,
}
