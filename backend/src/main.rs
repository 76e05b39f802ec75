use garage_availability::{config::AppConfig, create_router, initialize_backend};
use log::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    info!("Starting garage availability backend for garage '{}'", config.garage_id);

    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, &config.cors_origin);

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
