//! Seed loader integration tests.

mod common;

use catalog_service::seed;
use common::TestApp;
use mongodb::bson::doc;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn seed_populates_collections_and_indexes() {
    let app = TestApp::spawn().await;

    seed::run(&app.db).await.expect("Seed failed");

    assert_eq!(
        app.db.products().count_documents(None, None).await.unwrap(),
        3
    );
    assert_eq!(
        app.db
            .categories()
            .count_documents(None, None)
            .await
            .unwrap(),
        3
    );
    assert_eq!(
        app.db.reviews().count_documents(None, None).await.unwrap(),
        3
    );

    let product = app
        .db
        .products()
        .find_one(doc! { "_id": "SKU-1001" }, None)
        .await
        .unwrap()
        .expect("SKU-1001 should be seeded");
    assert_eq!(product.get_str("name").unwrap(), "Noise-Cancelling Headphones");

    let product_indexes = app.db.products().list_index_names().await.unwrap();
    assert!(product_indexes.contains(&"category_lookup".to_string()));
    assert!(product_indexes.contains(&"price_stock_lookup".to_string()));

    let review_indexes = app.db.reviews().list_index_names().await.unwrap();
    assert!(review_indexes.contains(&"recent_reviews_lookup".to_string()));

    // Seeded reviews are served by the live API
    let client = Client::new();
    let reviews: Vec<serde_json::Value> = client
        .get(format!("{}/products/SKU-1001/reviews", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(reviews.len(), 2);

    app.cleanup().await;
}

#[tokio::test]
async fn reseeding_discards_api_writes() {
    let app = TestApp::spawn().await;

    seed::run(&app.db).await.expect("Seed failed");

    let client = Client::new();
    let response = client
        .post(format!("{}/products", app.address))
        .json(&json!({ "_id": "SKU-EXTRA", "name": "Extra", "price": 1.0 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());
    assert_eq!(
        app.db.products().count_documents(None, None).await.unwrap(),
        4
    );

    seed::run(&app.db).await.expect("Re-seed failed");

    assert_eq!(
        app.db.products().count_documents(None, None).await.unwrap(),
        3
    );
    assert!(app
        .db
        .products()
        .find_one(doc! { "_id": "SKU-EXTRA" }, None)
        .await
        .unwrap()
        .is_none());

    app.cleanup().await;
}
