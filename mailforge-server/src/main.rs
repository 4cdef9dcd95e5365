//! Mailforge service binary

use mailforge_server::{config::ServerConfig, observability, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init()?;

    let config = ServerConfig::load()?;
    let addr = format!("{}:{}", config.service.host, config.service.port);
    tracing::info!(
        %addr,
        backend = ?config.email.backend,
        clip_threshold = config.export.clip_threshold_bytes,
        "starting mailforge-server"
    );

    let state = AppState::from_config(config)?;
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
