use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use image_search_backend::{create_app, BackendConfig, BackendError};
use image_search_repository::{azd, create_credential, SearchClient};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("image-search-backend failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BackendError> {
    // Hosted deployments get their variables from app settings; locally
    // they come from the default azd environment.
    if std::env::var("WEBSITE_HOSTNAME").is_err() {
        azd::load_default_environment().await?;
    }

    let config = BackendConfig::from_env()?;

    let filter = EnvFilter::try_from_env("APP_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let credential = create_credential(config.credential_kind, config.tenant_id.clone());
    let search_client = SearchClient::new(&config.search_service, &config.search_index, credential);

    let app = create_app(Arc::new(search_client), Path::new("static"));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        addr = %addr,
        service = %config.search_service,
        index = %config.search_index,
        "Starting image search backend"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
