use crate::models::{Category, Review};
use mongodb::{
    bson::{doc, Bson, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Create the secondary indexes the catalog relies on. Invoked by the
    /// seed loader after the collections are repopulated.
    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for catalog-service");

        let products = self.products();

        // Multikey index on category membership
        let category_index = IndexModel::builder()
            .keys(doc! { "categories": 1 })
            .options(
                IndexOptions::builder()
                    .name("category_lookup".to_string())
                    .build(),
            )
            .build();

        products.create_index(category_index, None).await.map_err(|e| {
            tracing::error!(
                "Failed to create category index on products collection: {}",
                e
            );
            AppError::from(e)
        })?;
        tracing::info!("Created index on products.categories");

        // Compound index on (price, in_stock) for storefront filtering
        let price_stock_index = IndexModel::builder()
            .keys(doc! { "price": 1, "in_stock": 1 })
            .options(
                IndexOptions::builder()
                    .name("price_stock_lookup".to_string())
                    .build(),
            )
            .build();

        products
            .create_index(price_stock_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create price_stock index on products collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on products.(price, in_stock)");

        // Compound index on (product_id, created_at desc) so the recent-review
        // listing is a covered range scan
        let recent_reviews_index = IndexModel::builder()
            .keys(doc! { "product_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("recent_reviews_lookup".to_string())
                    .build(),
            )
            .build();

        self.reviews()
            .create_index(recent_reviews_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create recent_reviews index on reviews collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on reviews.(product_id, created_at)");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Insert a product document, surfacing a primary-key conflict as an
    /// explicit `DuplicateKey` outcome. Returns the inserted `_id`.
    pub async fn insert_product(&self, document: Document) -> Result<Bson, AppError> {
        let result = self
            .products()
            .insert_one(document, None)
            .await
            .map_err(classify_insert_error)?;
        Ok(result.inserted_id)
    }

    /// Products are schema-flexible: the façade reads and writes them as raw
    /// documents.
    pub fn products(&self) -> Collection<Document> {
        self.db.collection("products")
    }

    pub fn reviews(&self) -> Collection<Review> {
        self.db.collection("reviews")
    }

    pub fn categories(&self) -> Collection<Category> {
        self.db.collection("categories")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// On the create path every insert failure belongs to the caller; a duplicate
/// `_id` (server code 11000) is distinguished and carries the store's message.
fn classify_insert_error(err: mongodb::error::Error) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
        if write_error.code == 11000 {
            return AppError::DuplicateKey(write_error.message.clone());
        }
    }
    AppError::BadRequest(anyhow::anyhow!(err))
}
