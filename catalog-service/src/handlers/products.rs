use crate::dtos::{CreateProductResponse, DeleteProductResponse, UpdateProductResponse};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::{doc, Bson, Document};
use service_core::error::AppError;

pub async fn create_product(
    State(state): State<AppState>,
    Json(document): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    let inserted_id = state.db.insert_product(document).await?;

    let id = match inserted_id {
        Bson::ObjectId(oid) => serde_json::Value::String(oid.to_hex()),
        other => other.into_relaxed_extjson(),
    };

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse { ok: true, id }),
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .db
        .products()
        .find_one(doc! { "_id": &id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Not found")))?;

    Ok(Json(document))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    // Merge-replace the named fields only; a missing id reports 0/0, not 404.
    let result = state
        .db
        .products()
        .update_one(doc! { "_id": &id }, doc! { "$set": fields }, None)
        .await
        .map_err(AppError::from)?;

    Ok(Json(UpdateProductResponse {
        matched: result.matched_count,
        modified: result.modified_count,
    }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .db
        .products()
        .delete_one(doc! { "_id": &id }, None)
        .await
        .map_err(AppError::from)?;

    Ok(Json(DeleteProductResponse {
        deleted: result.deleted_count,
    }))
}
