use std::sync::Arc;

use armory::config::Config;
use armory::embedding::{Embedder, HttpEmbedder};
use armory::routes::{self, AppState};
use sea_orm::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let db = Database::connect(&config.database_url).await?;

    let embedder: Option<Arc<dyn Embedder>> = match &config.embedding_endpoint {
        Some(endpoint) => Some(Arc::new(HttpEmbedder::new(endpoint)?)),
        None => {
            info!("EMBEDDING_SERVICE_URL not set, semantic search disabled");
            None
        }
    };

    let app = routes::app(AppState {
        db: Arc::new(db),
        embedder,
    })
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
