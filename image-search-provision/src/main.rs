use tracing::error;
use tracing_subscriber::EnvFilter;

use image_search_provision::{ProvisionConfig, ProvisionError, Provisioner};
use image_search_repository::azd;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Provisioning failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ProvisionError> {
    azd::load_default_environment().await?;

    let config = ProvisionConfig::from_env()?;
    let provisioner = Provisioner::new(config)?;
    provisioner.run().await
}
