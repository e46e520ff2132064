use crate::dtos::{ReviewResponse, ReviewSubmission};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use serde_json::json;
use service_core::error::AppError;

/// Cap on `GET /products/{id}/reviews`: only the most recent reviews are
/// served, newest first.
const RECENT_REVIEW_LIMIT: i64 = 5;

pub async fn list_recent_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let find_options = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .limit(RECENT_REVIEW_LIMIT)
        .build();

    let mut cursor = state
        .db
        .reviews()
        .find(doc! { "product_id": &id }, find_options)
        .await
        .map_err(AppError::from)?;

    let mut reviews = Vec::new();
    while let Some(review) = cursor.try_next().await.map_err(AppError::from)? {
        reviews.push(ReviewResponse::from(review));
    }

    Ok(Json(reviews))
}

pub async fn add_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(submission): Json<ReviewSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let review = submission.into_review(id);

    state
        .db
        .reviews()
        .insert_one(&review, None)
        .await
        .map_err(|e| {
            tracing::error!(
                product_id = %review.product_id,
                "Failed to insert review: {}",
                e
            );
            AppError::from(e)
        })?;

    Ok((StatusCode::CREATED, Json(json!({ "ok": true }))))
}
