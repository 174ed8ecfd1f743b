use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contract_manager::adapters::http::{build_app, HttpDependencies};
use contract_manager::adapters::{FixedContractIngestor, InMemoryContractReader};
use contract_manager::config::{AppConfig, LogFormat, ServerConfig};
use contract_manager::ports::{ContractIngestor, ContractReader};

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    match server.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let contract_reader: Arc<dyn ContractReader> = match &config.contracts.fixture_path {
        Some(path) => Arc::new(InMemoryContractReader::from_yaml_file(path)?),
        None => Arc::new(InMemoryContractReader::with_fixtures()),
    };
    let ingestor: Arc<dyn ContractIngestor> =
        Arc::new(FixedContractIngestor::from_config(&config.analyzer));

    let app = build_app(
        &config,
        HttpDependencies {
            contract_reader,
            ingestor,
        },
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        "contract-manager listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
