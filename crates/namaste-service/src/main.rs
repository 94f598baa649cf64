//! NAMASTE terminology HTTP server binary.

use namaste_loader::{CodeStore, LoaderConfig};
use namaste_service::{terminology_router, ServiceConfig, TerminologyServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServiceConfig::from_env();

    tracing::info!("Loading NAMASTE code mappings from: {}", config.data_path.display());

    let mut store = CodeStore::new();
    let stats = store.load_file(&config.data_path, &LoaderConfig::default())?;
    if stats.error_count > 0 {
        tracing::warn!("Skipped {} malformed records", stats.error_count);
    }
    tracing::info!(
        "Stored {} of {} records ({:.1}%), {} filtered out",
        stats.loaded_records,
        stats.total_records,
        stats.load_rate(),
        stats.skipped_records
    );

    tracing::info!(
        "Loaded {} records ({} mapped) across {} categories and {} TM2 codes",
        store.record_count(),
        store.mapped_count(),
        store.category_count(),
        store.target_code_count()
    );

    let server = TerminologyServer::from_code_store(store, config.resolver.clone(), config.query_timeout);
    let app = terminology_router(server);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting NAMASTE terminology server on {}", addr);
    tracing::info!("APIs available: /api/terminology, /internal/terminology");

    axum::serve(listener, app).await?;

    Ok(())
}
