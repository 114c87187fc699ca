mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env()?;
    let app = routes::app(config.api.clone())?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, users_api = %config.api.base_url, "roster host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
