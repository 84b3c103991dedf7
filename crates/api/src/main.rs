use std::sync::Arc;

use spendlog_api::app;
use spendlog_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    spendlog_observability::init();

    let config = AppConfig::from_env()?;

    let services = Arc::new(app::services::AppServices::postgres(&config.database_url).await?);
    let router = app::build_app(config.auth_token, services);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process is asked to stop (SIGINT or SIGTERM); axum then
/// drains in-flight requests before returning.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
