use std::process::ExitCode;

use clap::Parser;
use tickchart_core::{ApiClient, ChartService};
use tickchart_web::{router, AppState, ServerArgs, SymbolCatalog, WebError};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "tickchart=info,tickchart_core=info,tickchart_web=info";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "tickchart stopped");
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

async fn run() -> Result<(), WebError> {
    let args = ServerArgs::parse();

    let config = args.api_config()?;
    let catalog = SymbolCatalog::load(&args.symbols)?;
    tracing::info!(?config, symbols = catalog.len(), "configuration loaded");

    let service =
        ChartService::new(ApiClient::new(config)).with_symbol_verification(args.verify_symbols);
    let app = router(AppState::new(service, catalog));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .map_err(|source| WebError::Bind {
            addr: args.bind.clone(),
            source,
        })?;
    tracing::info!(addr = %args.bind, "listening");

    axum::serve(listener, app).await.map_err(WebError::Serve)
}
