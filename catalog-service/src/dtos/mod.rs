pub mod products;
pub mod reviews;

pub use products::{CreateProductResponse, DeleteProductResponse, UpdateProductResponse};
pub use reviews::{ReviewResponse, ReviewSubmission};
