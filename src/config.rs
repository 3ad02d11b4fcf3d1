use std::env;

use crate::error::AppError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string of the backing store. Required; absence is fatal.
    pub database_url: String,
    /// Base URL of the embedding service. Absent means semantic search is
    /// disabled and all searches are lexical.
    pub embedding_endpoint: Option<String>,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| AppError::MissingEnv("DATABASE_URL"))?;
        let embedding_endpoint = env::var("EMBEDDING_SERVICE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Self {
            database_url,
            embedding_endpoint,
            bind_addr,
        })
    }
}
