use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Aggregate rating summary kept on the product document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub count: i64,
}

/// Catalog product, keyed by a caller-assigned SKU string.
///
/// The live API treats product bodies as raw documents; this typed model is
/// what the seed loader writes and what tests deserialize against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub in_stock: bool,
    pub categories: Vec<String>,
    /// Free-form nested specification document, shape varies per product.
    pub specs: Document,
    pub tags: Vec<String>,
    pub ratings: RatingSummary,
}
