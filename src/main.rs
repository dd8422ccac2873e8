use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use allotment::error::{AllotmentError, Result};
use allotment::server;
use allotment::service::QueryService;
use allotment::settings::{DEFAULT_CONFIG_FILE, Settings};
use allotment::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // the first argument may name a configuration file, otherwise allotment.toml (if any) is used
    let config_file = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let settings = Settings::load(&config_file)?;

    let store = Arc::new(Store::new());
    let service = QueryService::new(Arc::clone(&store), settings.load_plan());
    // both tables are in place before the listener accepts anything
    let report = service.reload();
    info!(
        allocation = report.allocation.records,
        station = report.station.records,
        "initial load complete"
    );

    let app = server::router(service, &settings.server);
    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, base_path = %server::base_path(&settings.server.base_path), "listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| AllotmentError::Server(e.to_string()))
}
