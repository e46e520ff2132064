use catalog_service::config::CatalogConfig;
use catalog_service::seed;
use catalog_service::services::MongoDb;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("catalog-seed", "info");

    let config = CatalogConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    if !seed::reset_allowed() {
        tracing::error!(
            "Refusing to seed: set {}=1 to allow dropping the products, categories and reviews collections",
            seed::RESET_FLAG
        );
        std::process::exit(1);
    }

    let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            std::io::Error::other(format!("Database connection error: {}", e))
        })?;

    seed::run(&db).await.map_err(|e| {
        tracing::error!("Seed failed: {}", e);
        std::io::Error::other(format!("Seed error: {}", e))
    })?;

    Ok(())
}
