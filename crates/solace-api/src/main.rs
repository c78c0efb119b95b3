use tracing_subscriber::EnvFilter;

use solace_api::config::{ApiConfig, LogFormat};
use solace_api::state::AppState;
use solace_instruments::catalog::Catalog;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_format {
        // Structured JSON logging for the log shipper
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }

    let catalog = Catalog::standard()?;
    tracing::info!(
        instruments = catalog.instruments().count(),
        chart_limit = config.chart_limit,
        "instrument catalog loaded"
    );

    let state = AppState::new(catalog, config.chart_limit);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, solace_api::router(state)).await?;
    Ok(())
}
