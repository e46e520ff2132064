//! One-shot destructive bootstrap: drops the catalog collections, inserts
//! fixed sample data and creates the supporting indexes.
//!
//! Re-running discards anything accumulated through the live API, so the
//! `seed` binary refuses to act unless [`RESET_FLAG`] is set.

use crate::models::{Category, Product, RatingSummary, Review, ReviewUser};
use crate::services::MongoDb;
use chrono::Utc;
use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::Collection;
use service_core::error::AppError;

/// Environment flag gating the destructive reset.
pub const RESET_FLAG: &str = "CATALOG_SEED_RESET";

/// True when the operator explicitly allowed dropping live collections.
pub fn reset_allowed() -> bool {
    std::env::var(RESET_FLAG)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Drop and repopulate `products`, `categories` and `reviews`, then create
/// the catalog indexes. Review timestamps are assigned at run time.
pub async fn run(db: &MongoDb) -> Result<(), AppError> {
    tracing::info!("Dropping catalog collections for re-seed");
    drop_collection(&db.products()).await?;
    drop_collection(&db.categories()).await?;
    drop_collection(&db.reviews()).await?;

    let products: Vec<Document> = sample_products()
        .iter()
        .map(mongodb::bson::to_document)
        .collect::<Result<_, _>>()
        .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))?;

    db.products()
        .insert_many(products, None)
        .await
        .map_err(AppError::from)?;
    tracing::info!("Inserted sample products");

    db.categories()
        .insert_many(sample_categories(), None)
        .await
        .map_err(AppError::from)?;
    tracing::info!("Inserted sample categories");

    db.reviews()
        .insert_many(sample_reviews(), None)
        .await
        .map_err(AppError::from)?;
    tracing::info!("Inserted sample reviews");

    db.initialize_indexes().await?;

    tracing::info!("Seed completed");
    Ok(())
}

/// Dropping a collection that does not exist yet is not an error
/// (NamespaceNotFound, server code 26).
async fn drop_collection<T>(collection: &Collection<T>) -> Result<(), AppError> {
    match collection.drop(None).await {
        Ok(()) => Ok(()),
        Err(err) => {
            if let ErrorKind::Command(ref command_error) = *err.kind {
                if command_error.code == 26 {
                    return Ok(());
                }
            }
            Err(AppError::from(err))
        }
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "SKU-1001".to_string(),
            name: "Noise-Cancelling Headphones".to_string(),
            brand: "AcoustiX".to_string(),
            price: 149.99,
            in_stock: true,
            categories: vec!["audio".to_string(), "accessories".to_string()],
            specs: doc! { "color": "black", "weight_grams": 250, "battery_hours": 30 },
            tags: vec![
                "wireless".to_string(),
                "bluetooth".to_string(),
                "ANC".to_string(),
            ],
            ratings: RatingSummary {
                average: 4.5,
                count: 124,
            },
        },
        Product {
            id: "SKU-1002".to_string(),
            name: "Portable Bluetooth Speaker".to_string(),
            brand: "SoundBay".to_string(),
            price: 89.99,
            in_stock: true,
            categories: vec!["audio".to_string()],
            specs: doc! { "waterproof": "IPX7", "battery_hours": 12, "color": "blue" },
            tags: vec!["portable".to_string(), "bass".to_string()],
            ratings: RatingSummary {
                average: 4.1,
                count: 80,
            },
        },
        Product {
            id: "SKU-2001".to_string(),
            name: "USB-C Charger 65W".to_string(),
            brand: "ChargePro".to_string(),
            price: 39.99,
            in_stock: true,
            categories: vec!["power".to_string(), "accessories".to_string()],
            specs: doc! { "color": "white", "wattage": 65, "ports": ["USB-C"] },
            tags: vec!["fast-charge".to_string(), "compact".to_string()],
            ratings: RatingSummary {
                average: 4.3,
                count: 56,
            },
        },
    ]
}

fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            slug: "audio".to_string(),
            display_name: "Audio".to_string(),
            description: "Headphones, speakers, audio gear".to_string(),
        },
        Category {
            slug: "accessories".to_string(),
            display_name: "Accessories".to_string(),
            description: "Cables, chargers, cases".to_string(),
        },
        Category {
            slug: "power".to_string(),
            display_name: "Power".to_string(),
            description: "Charging devices and power banks".to_string(),
        },
    ]
}

fn sample_reviews() -> Vec<Review> {
    let now = Utc::now();
    vec![
        Review {
            id: None,
            product_id: "SKU-1001".to_string(),
            user: Some(ReviewUser {
                id: "U-001".to_string(),
                name: "Alice".to_string(),
            }),
            rating: Some(5.0),
            comment: Some("Excellent noise cancellation!".to_string()),
            created_at: now,
            extra: Document::new(),
        },
        Review {
            id: None,
            product_id: "SKU-1001".to_string(),
            user: Some(ReviewUser {
                id: "U-002".to_string(),
                name: "Bob".to_string(),
            }),
            rating: Some(4.0),
            comment: Some("Great sound, a bit tight fit.".to_string()),
            created_at: now,
            extra: Document::new(),
        },
        Review {
            id: None,
            product_id: "SKU-2001".to_string(),
            user: Some(ReviewUser {
                id: "U-003".to_string(),
                name: "Charlie".to_string(),
            }),
            rating: Some(5.0),
            comment: Some("Charges my laptop fast.".to_string()),
            created_at: now,
            extra: Document::new(),
        },
    ]
}
