pub mod config;
pub mod embedding;
pub mod entity;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod query;
pub mod routes;
pub mod sort;

pub use error::AppError;
