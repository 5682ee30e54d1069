mod config;
mod routes;
mod services;
mod sso;
mod state;
mod views;

use tokio_util::sync::CancellationToken;

use crate::services::pacer::Pacer;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
    #[error("page templates failed to load: {0}")]
    Templates(#[from] minijinja::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is normal; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let shutdown = CancellationToken::new();
    let views = views::Views::new()?;
    let state = state::AppState::new(Pacer::new(config.pacing, shutdown.clone()), views);

    let app = routes::app(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, pacing = ?config.pacing, "mock-sso listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("mock-sso stopped");
    Ok(())
}

/// Resolve on Ctrl-C and cancel pending simulated delays.
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
    shutdown.cancel();
}
