use crate::models::{Review, ReviewUser};
use chrono::{DateTime, Utc};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Body of `POST /products/{id}/reviews`. Every field is optional;
/// unrecognized fields ride along in `extra` and are stored verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSubmission {
    pub user: Option<ReviewUser>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl ReviewSubmission {
    /// Build the stored review. The server owns `product_id` and
    /// `created_at`; caller-supplied copies of those fields are discarded.
    pub fn into_review(mut self, product_id: String) -> Review {
        self.extra.remove("product_id");
        self.extra.remove("created_at");
        Review {
            id: None,
            product_id,
            user: self.user,
            rating: self.rating,
            comment: self.comment,
            created_at: Utc::now(),
            extra: self.extra,
        }
    }
}

/// Wire form of a review: ObjectId rendered as hex, timestamp as RFC 3339.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ReviewUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            product_id: review.product_id,
            user: review.user,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            extra: review.extra,
        }
    }
}
