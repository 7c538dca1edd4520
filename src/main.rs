use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use reviewer_assign::adapters::http::{api_router, with_middleware};
use reviewer_assign::adapters::postgres::{PostgresPullRequestRepository, PostgresTeamRepository};
use reviewer_assign::adapters::random::ThreadRngShuffler;
use reviewer_assign::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(environment = ?config.server.environment, "Starting reviewer assignment service");

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to PostgreSQL"
    );

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let app = with_middleware(
        api_router(
            Arc::new(PostgresTeamRepository::new(pool.clone())),
            Arc::new(PostgresPullRequestRepository::new(pool.clone())),
            Arc::new(ThreadRngShuffler::new()),
        ),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    let shutdown = Arc::new(Notify::new());
    let trigger = shutdown.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { trigger.notified().await })
            .await
    });

    tokio::select! {
        result = &mut server => {
            result??;
            pool.close().await;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    info!("Shutdown signal received, draining in-flight requests");
    shutdown.notify_one();

    match tokio::time::timeout(config.server.shutdown_timeout(), server).await {
        Ok(joined) => joined??,
        Err(_) => warn!(
            timeout_secs = config.server.shutdown_timeout_secs,
            "Graceful shutdown timed out, dropping remaining connections"
        ),
    }

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
