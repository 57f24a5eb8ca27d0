// HTTP server setup (Axum)
pub mod app;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod routes;

pub use app::*;
pub use error::AppError;
