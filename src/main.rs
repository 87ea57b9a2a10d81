//! Quote Qualifier server binary.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use quote_qualifier::adapters::http::{app_router, QualificationAppState};
use quote_qualifier::adapters::storage::{
    FileQuoteRecordRepository, InMemoryQuoteRecordRepository, InMemorySessionStore,
};
use quote_qualifier::config::{AppConfig, LogFormat, StorageBackend};
use quote_qualifier::domain::pricing::PriceEstimator;
use quote_qualifier::ports::QuoteRecordRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level, config.server.log_format);

    let table = config.pricing.load_table()?;
    if config.server.is_production() && config.storage.backend == StorageBackend::Memory {
        tracing::warn!("in-memory storage in production; finished records are lost on restart");
    }

    let records: Arc<dyn QuoteRecordRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryQuoteRecordRepository::new()),
        StorageBackend::File => Arc::new(FileQuoteRecordRepository::new(&config.storage.data_dir)),
    };

    let idle_timeout = config.storage.session_idle_timeout();
    let sessions = Arc::new(InMemorySessionStore::with_idle_timeout(idle_timeout));
    tokio::spawn(sweep_idle_sessions(sessions.clone(), idle_timeout));

    let state = QualificationAppState::new(
        records,
        sessions,
        Arc::new(PriceEstimator::new(table)),
    );
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        "quote-qualifier listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("quote-qualifier stopped");
    Ok(())
}

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn sweep_idle_sessions(sessions: Arc<InMemorySessionStore>, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    loop {
        ticker.tick().await;
        sessions.evict_idle().await;
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
