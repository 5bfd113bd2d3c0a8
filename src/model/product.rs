use serde::Serialize;

/// An item of official merchandise.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    /// Available sizes, never empty.
    pub sizes: Vec<String>,
    pub colors: Option<Vec<String>>,
    pub in_stock: bool,
    pub featured: bool,
}
