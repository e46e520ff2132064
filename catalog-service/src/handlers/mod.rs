pub mod health;
pub mod products;
pub mod reviews;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use products::{create_product, delete_product, get_product, update_product};
pub use reviews::{add_review, list_recent_reviews};
