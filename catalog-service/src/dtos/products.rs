use serde::Serialize;

/// Acknowledgement for `POST /products`; `id` echoes the inserted `_id`.
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub ok: bool,
    pub id: serde_json::Value,
}

/// Counts reported by `PATCH /products/{id}`. Both are zero when no document
/// matched the identifier.
#[derive(Debug, Serialize)]
pub struct UpdateProductResponse {
    pub matched: u64,
    pub modified: u64,
}

#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub deleted: u64,
}
