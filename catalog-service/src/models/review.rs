use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document};
use serde::{Deserialize, Serialize};

/// Denormalized reviewer reference embedded in each review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewUser {
    pub id: String,
    pub name: String,
}

/// A product review. Immutable once written.
///
/// `product_id` and `created_at` are server-assigned on submission; there is
/// no referential integrity against `products`, so orphans are permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ReviewUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Whatever else the caller sent, stored verbatim.
    #[serde(flatten)]
    pub extra: Document,
}
