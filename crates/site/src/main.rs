//! Binary entrypoint for the Dev Vault server.

use site::SiteConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> site::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SiteConfig::from_env()?;
    site::start_server(&config).await
}
