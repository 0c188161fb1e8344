//! EduLibrary Server - Educational Resource Catalog
//!
//! Serves the resource catalog REST API.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edulibrary_server::{
    api,
    config::{AppConfig, LoggingConfig, StorageBackend},
    models::seed::seed_resources,
    repository::{self, InMemoryRepository, PostgresRepository, ResourceRepository, UuidGenerator},
    services::Services,
    AppState,
};

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("edulibrary_server={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn ResourceRepository>> {
    let ids = Arc::new(UuidGenerator);

    let repo: Arc<dyn ResourceRepository> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Arc::new(InMemoryRepository::new(ids))
        }
        StorageBackend::Postgres => {
            tracing::info!("Using PostgreSQL storage");
            Arc::new(PostgresRepository::connect(&config.storage, ids).await?)
        }
    };

    if config.storage.seed {
        repository::seed(repo.as_ref(), seed_resources()).await?;
    }

    Ok(repo)
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting EduLibrary Server v{}", env!("CARGO_PKG_VERSION"));

    let repository = build_repository(&config).await?;

    let addr: SocketAddr = config.bind_address().parse()?;

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(repository)),
    };

    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
